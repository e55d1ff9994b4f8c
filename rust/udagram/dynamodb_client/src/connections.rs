use anyhow::Context;
use aws_sdk_dynamodb::Client;
use model_udagram::connection::{Connection, ConnectionTableKey};

#[tracing::instrument(skip(client))]
pub async fn put_connection(
    client: &Client,
    table: &str,
    connection: &Connection,
) -> anyhow::Result<()> {
    let item = serde_dynamo::to_item(connection).context("should be able to serialize to item")?;

    client
        .put_item()
        .table_name(table)
        .set_item(Some(item))
        .send()
        .await
        .context("failed to put connection")?;

    Ok(())
}

#[tracing::instrument(skip(client))]
pub async fn scan_connections(client: &Client, table: &str) -> anyhow::Result<Vec<Connection>> {
    let output = client
        .scan()
        .table_name(table)
        .send()
        .await
        .context("failed to scan connections")?;

    let connections = serde_dynamo::from_items(output.items.unwrap_or_default())
        .context("connection items are malformed")?;

    Ok(connections)
}

#[tracing::instrument(skip(client))]
pub async fn delete_connection(
    client: &Client,
    table: &str,
    connection_id: &str,
) -> anyhow::Result<()> {
    let key = serde_dynamo::to_item(ConnectionTableKey { id: connection_id })?;

    client
        .delete_item()
        .table_name(table)
        .set_key(Some(key))
        .send()
        .await
        .context("failed to delete connection")?;

    Ok(())
}
