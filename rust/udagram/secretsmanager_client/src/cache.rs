use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::SecretManager;

/// A single field of a json secret, fetched on first use and then kept for the lifetime of the process.
///
/// There is no invalidation, a rotated secret is only seen once the process is recycled.
/// A failed fetch is not cached so the next call tries again.
pub struct CachedSecretField<S> {
    manager: S,
    secret_id: String,
    field: String,
    value: OnceCell<Arc<str>>,
}

#[derive(Debug, Error)]
pub enum CachedSecretErr<E> {
    #[error("unable to fetch secret: {0}")]
    Fetch(E),
    #[error("secret is not a json object: {0}")]
    NotJson(#[from] serde_json::Error),
    #[error("secret has no string field {0}")]
    MissingField(String),
}

impl<S> CachedSecretField<S>
where
    S: SecretManager,
{
    pub fn new(manager: S, secret_id: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            manager,
            secret_id: secret_id.into(),
            field: field.into(),
            value: OnceCell::new(),
        }
    }

    /// Returns the cached value, fetching it if this is the first successful call
    #[tracing::instrument(skip(self), fields(secret_id = %self.secret_id, field = %self.field))]
    pub async fn get(&self) -> Result<Arc<str>, CachedSecretErr<S::Err>> {
        let value = self
            .value
            .get_or_try_init(|| async {
                tracing::trace!("secret not cached, fetching");
                let raw = self
                    .manager
                    .get_secret_value(&self.secret_id)
                    .await
                    .map_err(CachedSecretErr::Fetch)?;
                extract_field::<S::Err>(&raw, &self.field)
            })
            .await?;

        Ok(value.clone())
    }
}

fn extract_field<E>(raw: &str, field: &str) -> Result<Arc<str>, CachedSecretErr<E>> {
    let secret: serde_json::Value = serde_json::from_str(raw)?;

    secret
        .get(field)
        .and_then(|v| v.as_str())
        .map(Arc::from)
        .ok_or_else(|| CachedSecretErr::MissingField(field.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockSecretManager, SecretErr};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn it_fetches_the_secret_only_once() {
        let mut manager = MockSecretManager::new();
        manager
            .expect_get_secret_value()
            .with(eq("Auth0Secret-dev"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(Arc::from(r#"{"auth0Secret":"shh"}"#)) }));

        let cached = CachedSecretField::new(manager, "Auth0Secret-dev", "auth0Secret");

        assert_eq!(&*cached.get().await.unwrap(), "shh");
        assert_eq!(&*cached.get().await.unwrap(), "shh");
    }

    #[tokio::test]
    async fn it_retries_after_a_failed_fetch() {
        let mut manager = MockSecretManager::new();
        let mut seq = mockall::Sequence::new();
        manager
            .expect_get_secret_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Err(SecretErr::NotPresent) }));
        manager
            .expect_get_secret_value()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Box::pin(async { Ok(Arc::from(r#"{"auth0Secret":"shh"}"#)) }));

        let cached = CachedSecretField::new(manager, "Auth0Secret-dev", "auth0Secret");

        assert!(matches!(
            cached.get().await,
            Err(CachedSecretErr::Fetch(SecretErr::NotPresent))
        ));
        assert_eq!(&*cached.get().await.unwrap(), "shh");
    }

    #[tokio::test]
    async fn it_reports_a_missing_field() {
        let mut manager = MockSecretManager::new();
        manager
            .expect_get_secret_value()
            .returning(|_| Box::pin(async { Ok(Arc::from(r#"{"other":"value"}"#)) }));

        let cached = CachedSecretField::new(manager, "Auth0Secret-dev", "auth0Secret");

        let err = cached.get().await.unwrap_err();
        assert_eq!(err.to_string(), "secret has no string field auth0Secret");
    }

    #[test]
    fn it_rejects_a_non_json_secret() {
        let err = extract_field::<SecretErr>("plain text", "auth0Secret").unwrap_err();
        assert!(matches!(err, CachedSecretErr::NotJson(_)));
    }
}
