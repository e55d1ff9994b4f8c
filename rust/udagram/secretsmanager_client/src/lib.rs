//! Access to secrets stored in aws secrets manager.
//!
//! [CachedSecretField] keeps a secret in memory for the lifetime of the process.
use aws_sdk_secretsmanager as secretsmanager;
use std::sync::Arc;
use thiserror::Error;

mod cache;

pub use cache::{CachedSecretErr, CachedSecretField};

/// a trait to abstract away the expected interface for fetching a secret from a remote server
#[cfg_attr(any(test, feature = "mock"), mockall::automock(type Err = SecretErr;))]
pub trait SecretManager: Send + Sync + 'static {
    /// The error that can be returned from the server
    type Err: std::error::Error + Send + Sync + 'static;

    /// fetch the secret string stored under the id
    fn get_secret_value(
        &self,
        secret_id: &str,
    ) -> impl Future<Output = Result<Arc<str>, Self::Err>> + Send;
}

#[derive(Clone, Debug)]
pub struct SecretsManagerClient {
    inner: secretsmanager::Client,
}

#[derive(Debug, Error)]
pub enum SecretErr {
    #[error("{0:?}")]
    AwsErr(#[from] aws_sdk_secretsmanager::Error),
    #[error("The secret did not exist in aws")]
    NotPresent,
}

impl SecretsManagerClient {
    pub fn new(inner: secretsmanager::Client) -> Self {
        Self { inner }
    }
}

impl SecretManager for SecretsManagerClient {
    type Err = SecretErr;

    #[tracing::instrument(err, skip(self))]
    async fn get_secret_value(&self, secret_id: &str) -> Result<Arc<str>, SecretErr> {
        let result = self
            .inner
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(aws_sdk_secretsmanager::Error::from)?;

        if let Some(secret_string) = result.secret_string() {
            return Ok(Arc::from(secret_string));
        }

        Err(SecretErr::NotPresent)
    }
}
