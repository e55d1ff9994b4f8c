use anyhow::Context;
use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
use dynamodb_client::{Connections, DynamodbClient, Tables};
use udagram::domain::service::UploadNotifier;
use websocket_gateway_client::{WebsocketGateway, callback_url};

/// The notifier as deployed, posting through the websocket api management endpoint
pub type Notifier = UploadNotifier<Connections, WebsocketGateway>;

#[derive(Debug, Clone)]
pub struct Config {
    pub connections_table: String,
    pub api_id: String,
    pub region: String,
    pub stage: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            connections_table: std::env::var("CONNECTIONS_TABLE")
                .context("CONNECTIONS_TABLE must be provided")?,
            api_id: std::env::var("API_ID").context("API_ID must be provided")?,
            region: std::env::var("REGION").context("REGION must be provided")?,
            stage: std::env::var("STAGE").context("STAGE must be provided")?,
        })
    }

    pub async fn into_notifier(self) -> Notifier {
        let aws_config = load_aws_config().await;
        let dynamodb = DynamodbClient::new(
            &aws_config,
            Tables {
                connections: Some(self.connections_table),
                ..Default::default()
            },
        );
        let gateway = WebsocketGateway::new(
            &aws_config,
            &callback_url(&self.api_id, &self.region, &self.stage),
        );

        UploadNotifier::new(dynamodb.connections, gateway)
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
