use anyhow::Context;

use crate::domain::{
    models::ThumbnailConfig,
    ports::ObjectStore,
    thumbnail::{THUMBNAIL_CONTENT_TYPE, make_thumbnail, thumbnail_key},
};

/// Writes a thumbnail of every uploaded image to the thumbnails bucket
pub struct ThumbnailGenerator<O> {
    objects: O,
    config: ThumbnailConfig,
}

impl<O> ThumbnailGenerator<O>
where
    O: ObjectStore,
{
    pub fn new(objects: O, config: ThumbnailConfig) -> Self {
        ThumbnailGenerator { objects, config }
    }

    /// Resizes the image stored at `key` and returns the key of the thumbnail
    #[tracing::instrument(err, skip(self))]
    pub async fn process(&self, key: &str) -> anyhow::Result<String> {
        let original = self
            .objects
            .get_object(&self.config.images_bucket, key)
            .await?;
        tracing::debug!(bytes = original.len(), "fetched original");

        let thumbnail = tokio::task::spawn_blocking(move || make_thumbnail(&original))
            .await
            .context("resize task panicked")??;

        let thumbnail_key = thumbnail_key(key);
        self.objects
            .put_object(
                &self.config.thumbnails_bucket,
                &thumbnail_key,
                &thumbnail,
                THUMBNAIL_CONTENT_TYPE,
            )
            .await?;

        tracing::info!(thumbnail_key = %thumbnail_key, bytes = thumbnail.len(), "stored thumbnail");
        Ok(thumbnail_key)
    }
}
