use anyhow::Context;
use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
use dynamodb_client::{Connections, DynamodbClient, Tables};
use udagram::{domain::service::ConnectionRegistry, outbound::time::DefaultTime};

/// The registry as deployed, backed by the connections table
pub type Registry = ConnectionRegistry<Connections, DefaultTime>;

#[derive(Debug, Clone)]
pub struct Config {
    pub connections_table: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let connections_table =
            std::env::var("CONNECTIONS_TABLE").context("CONNECTIONS_TABLE must be provided")?;

        Ok(Config { connections_table })
    }

    pub async fn into_registry(self) -> Registry {
        let aws_config = load_aws_config().await;
        let dynamodb = DynamodbClient::new(
            &aws_config,
            Tables {
                connections: Some(self.connections_table),
                ..Default::default()
            },
        );

        ConnectionRegistry::new(dynamodb.connections, DefaultTime)
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
