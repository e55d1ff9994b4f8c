use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

/// Generate a URL for a presigned PUT request.
#[tracing::instrument(skip(client))]
pub(crate) async fn put_presigned_url(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    duration_seconds: u64,
) -> anyhow::Result<String> {
    let expires_in = Duration::from_secs(duration_seconds);
    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .presigned(PresigningConfig::expires_in(expires_in)?)
        .await?;

    Ok(presigned_request.uri().to_string())
}
