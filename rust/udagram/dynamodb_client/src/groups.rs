use anyhow::Context;
use aws_sdk_dynamodb::Client;
use model_udagram::group::{Group, GroupTableKey};

#[tracing::instrument(skip(client))]
pub async fn get_group(client: &Client, table: &str, group_id: &str) -> anyhow::Result<Option<Group>> {
    let key = serde_dynamo::to_item(GroupTableKey { id: group_id })?;

    let output = client
        .get_item()
        .table_name(table)
        .set_key(Some(key))
        .send()
        .await
        .context("failed to get group")?;

    match output.item {
        Some(item) => Ok(Some(
            serde_dynamo::from_item(item).context("group item is malformed")?,
        )),
        None => Ok(None),
    }
}

#[tracing::instrument(skip(client))]
pub async fn scan_groups(client: &Client, table: &str) -> anyhow::Result<Vec<Group>> {
    let output = client
        .scan()
        .table_name(table)
        .send()
        .await
        .context("failed to scan groups")?;

    let groups = serde_dynamo::from_items(output.items.unwrap_or_default())
        .context("group items are malformed")?;

    Ok(groups)
}

#[tracing::instrument(skip(client))]
pub async fn put_group(client: &Client, table: &str, group: &Group) -> anyhow::Result<()> {
    let item = serde_dynamo::to_item(group).context("should be able to serialize to item")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
        .context("failed to put group")?;

    Ok(())
}
