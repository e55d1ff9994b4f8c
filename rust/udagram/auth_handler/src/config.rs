use anyhow::Context;
use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
use secretsmanager_client::{CachedSecretField, SecretsManagerClient};
use udagram::domain::service::AuthorizerImpl;

/// The authorizer as deployed, reading the signing secret from secrets manager once per process
pub type Authorizer = AuthorizerImpl<CachedSecretField<SecretsManagerClient>>;

#[derive(Debug, Clone)]
pub struct Config {
    /// id of the json secret holding the signing secret
    pub secret_id: String,
    /// field of that json secret
    pub secret_field: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads `AUTH_0_*`, falling back to the `AUTH_O_*` spelling older deployments use
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let either = |name: &str, legacy: &str| {
            var(name)
                .or_else(|| var(legacy))
                .with_context(|| format!("{name} must be provided"))
        };

        Ok(Config {
            secret_id: either("AUTH_0_SECRET_ID", "AUTH_O_SECRET_ID")?,
            secret_field: either("AUTH_0_SECRET_FIELD", "AUTH_O_SECRET_FIELD")?,
        })
    }

    pub async fn into_authorizer(self) -> Authorizer {
        let aws_config = load_aws_config().await;
        let secrets = SecretsManagerClient::new(aws_sdk_secretsmanager::Client::new(&aws_config));

        AuthorizerImpl::new(CachedSecretField::new(
            secrets,
            self.secret_id,
            self.secret_field,
        ))
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn it_reads_the_secret_location() {
        let config = config(&[
            ("AUTH_0_SECRET_ID", "Auth0Secret-dev"),
            ("AUTH_0_SECRET_FIELD", "auth0Secret"),
        ])
        .unwrap();

        assert_eq!(config.secret_id, "Auth0Secret-dev");
        assert_eq!(config.secret_field, "auth0Secret");
    }

    #[test]
    fn it_accepts_the_letter_o_spelling() {
        let config = config(&[
            ("AUTH_O_SECRET_ID", "legacy-id"),
            ("AUTH_O_SECRET_FIELD", "legacy-field"),
            ("AUTH_0_SECRET_FIELD", "auth0Secret"),
        ])
        .unwrap();

        assert_eq!(config.secret_id, "legacy-id");
        assert_eq!(config.secret_field, "auth0Secret");
    }

    #[test]
    fn it_names_the_missing_variable() {
        let err = config(&[("AUTH_0_SECRET_ID", "id")]).unwrap_err();

        assert_eq!(err.to_string(), "AUTH_0_SECRET_FIELD must be provided");
    }
}
