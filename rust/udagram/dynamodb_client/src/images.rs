use anyhow::Context;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use model_udagram::image::Image;

#[tracing::instrument(skip(client))]
pub async fn put_image(client: &Client, table: &str, image: &Image) -> anyhow::Result<()> {
    let item = serde_dynamo::to_item(image).context("should be able to serialize to item")?;

    tracing::trace!(image_id = %image.image_id, "storing new image");

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
        .context("failed to put image")?;

    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn get_images_for_group(
    client: &Client,
    table: &str,
    group_id: &str,
) -> anyhow::Result<Vec<Image>> {
    let output = client
        .query()
        .table_name(table)
        .key_condition_expression("groupId = :groupId")
        .expression_attribute_values(":groupId", AttributeValue::S(group_id.to_string()))
        // sort key is the timestamp, newest first
        .scan_index_forward(false)
        .send()
        .await
        .context("failed to query images for group")?;

    let images = serde_dynamo::from_items(output.items.unwrap_or_default())
        .context("image items are malformed")?;

    Ok(images)
}

#[tracing::instrument(skip(client))]
pub async fn get_image(
    client: &Client,
    table: &str,
    index: &str,
    image_id: &str,
) -> anyhow::Result<Option<Image>> {
    let output = client
        .query()
        .table_name(table)
        .index_name(index)
        .key_condition_expression("imageId = :imageId")
        .expression_attribute_values(":imageId", AttributeValue::S(image_id.to_string()))
        .send()
        .await
        .context("failed to query image by id")?;

    match output.items.and_then(|items| items.into_iter().next()) {
        Some(item) => Ok(Some(
            serde_dynamo::from_item(item).context("image item is malformed")?,
        )),
        None => Ok(None),
    }
}
