use anyhow::Context;
use aws_config::{Region, SdkConfig, meta::region::RegionProviderChain};
use s3_client::S3;
use udagram::domain::{models::ThumbnailConfig, service::ThumbnailGenerator};

#[derive(Debug, Clone)]
pub struct Config {
    pub thumbnails: ThumbnailConfig,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            thumbnails: ThumbnailConfig {
                images_bucket: std::env::var("IMAGES_S3_BUCKET")
                    .context("IMAGES_S3_BUCKET must be provided")?,
                thumbnails_bucket: std::env::var("THUMBNAILS_S3_BUCKET")
                    .context("THUMBNAILS_S3_BUCKET must be provided")?,
            },
        })
    }

    pub async fn into_generator(self) -> ThumbnailGenerator<S3> {
        let aws_config = load_aws_config().await;
        let s3 = S3::new(aws_sdk_s3::Client::new(&aws_config));

        ThumbnailGenerator::new(s3, self.thumbnails)
    }
}

pub async fn load_aws_config() -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await
}
