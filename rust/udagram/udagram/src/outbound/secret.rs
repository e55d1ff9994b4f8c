use std::sync::Arc;

use secretsmanager_client::{CachedSecretField, SecretManager};

use crate::domain::ports::SigningSecret;

impl<S> SigningSecret for CachedSecretField<S>
where
    S: SecretManager,
{
    async fn signing_secret(&self) -> anyhow::Result<Arc<str>> {
        Ok(self.get().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use secretsmanager_client::MockSecretManager;

    #[tokio::test]
    async fn it_reads_the_configured_field() {
        let mut manager = MockSecretManager::new();
        manager
            .expect_get_secret_value()
            .with(eq("auth0"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(Arc::from(r#"{"secret":"hunter2"}"#)) }));

        let secret = CachedSecretField::new(manager, "auth0", "secret");

        assert_eq!(&*secret.signing_secret().await.unwrap(), "hunter2");
        assert_eq!(&*secret.signing_secret().await.unwrap(), "hunter2");
    }
}
