use anyhow::Context;
use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
use opensearch_client::{DEFAULT_IMAGES_INDEX, OpensearchClient};

#[derive(Debug, Clone)]
pub struct Config {
    /// domain endpoint without scheme
    pub es_endpoint: String,
    pub search_index: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let es_endpoint = std::env::var("ES_ENDPOINT").context("ES_ENDPOINT must be provided")?;
        let search_index = std::env::var("SEARCH_INDEX")
            .ok()
            .filter(|index| !index.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGES_INDEX.to_string());

        Ok(Config {
            es_endpoint,
            search_index,
        })
    }

    pub async fn into_client(self) -> anyhow::Result<OpensearchClient> {
        let aws_config = load_aws_config().await;

        OpensearchClient::new_aws(&self.es_endpoint, &aws_config, self.search_index)
            .context("unable to create opensearch client")
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
