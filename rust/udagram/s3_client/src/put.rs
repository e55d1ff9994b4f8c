use anyhow::Context;

#[tracing::instrument(skip(client, content))]
pub(crate) async fn put(
    client: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    content: &[u8],
    content_type: &str,
) -> anyhow::Result<()> {
    let body = aws_sdk_s3::primitives::ByteStream::from(content.to_vec());
    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .body(body)
        .send()
        .await
        .context(format!("could not put item {key} into bucket {bucket}"))?;
    Ok(())
}
