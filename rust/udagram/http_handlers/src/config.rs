use anyhow::Context;
use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
use dynamodb_client::{DynamodbClient, Groups, Images, Tables};
use s3_client::S3;
use udagram::{
    domain::{models::GalleryConfig, service::GalleryImpl},
    outbound::time::DefaultTime,
};

/// How long an upload url stays valid when `SIGNED_URL_EXPIRATION` is not set
pub const DEFAULT_URL_EXPIRATION_SECONDS: u64 = 300;

/// The gallery as deployed, backed by dynamodb and s3
pub type Gallery = GalleryImpl<Groups, Images, S3, DefaultTime>;

#[derive(Debug, Clone)]
pub struct Config {
    pub tables: Tables,
    pub gallery: GalleryConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let images_bucket =
            std::env::var("IMAGES_S3_BUCKET").context("IMAGES_S3_BUCKET must be provided")?;
        let url_expiration_seconds =
            parse_expiration(std::env::var("SIGNED_URL_EXPIRATION").ok().as_deref())?;

        Ok(Config {
            tables: Tables {
                groups: std::env::var("GROUPS_TABLE").ok(),
                images: std::env::var("IMAGES_TABLE").ok(),
                image_id_index: std::env::var("IMAGE_ID_INDEX").ok(),
                connections: None,
            },
            gallery: GalleryConfig {
                images_bucket,
                url_expiration_seconds,
            },
        })
    }

    /// Builds the gallery service on top of the aws clients
    pub async fn into_gallery(self) -> Gallery {
        let aws_config = load_aws_config().await;
        let dynamodb = DynamodbClient::new(&aws_config, self.tables);
        let s3 = S3::new(aws_sdk_s3::Client::new(&aws_config));

        GalleryImpl::new(dynamodb.groups, dynamodb.images, s3, DefaultTime, self.gallery)
    }
}

fn parse_expiration(value: Option<&str>) -> anyhow::Result<u64> {
    match value {
        None | Some("") => Ok(DEFAULT_URL_EXPIRATION_SECONDS),
        Some(v) => v
            .parse()
            .context("SIGNED_URL_EXPIRATION must be a number of seconds"),
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
