mod get;
mod presign;
mod put;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Retreives the provided key from the bucket.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        get::get(&self.inner, bucket, key).await
    }

    /// Puts the provided content into the bucket at the provided key with the given content type.
    #[tracing::instrument(skip(self, content), fields(content_len = content.len()))]
    pub async fn put(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> anyhow::Result<()> {
        put::put(&self.inner, bucket, key, content, content_type).await
    }

    /// Gets a presigned url a client can PUT the object to without further credentials.
    #[tracing::instrument(skip(self))]
    pub async fn put_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        duration_seconds: u64,
    ) -> anyhow::Result<String> {
        presign::put_presigned_url(&self.inner, bucket, key, duration_seconds).await
    }
}
