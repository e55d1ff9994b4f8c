use s3_client::S3;

use crate::domain::ports::ObjectStore;

impl ObjectStore for S3 {
    async fn get_object(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        self.get(bucket, key).await
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        content: &[u8],
        content_type: &str,
    ) -> anyhow::Result<()> {
        self.put(bucket, key, content, content_type).await
    }

    async fn upload_url(
        &self,
        bucket: &str,
        key: &str,
        expires_in_seconds: u64,
    ) -> anyhow::Result<String> {
        self.put_presigned_url(bucket, key, expires_in_seconds).await
    }
}
