use model_udagram::{connection::Connection, image::format_timestamp};

use crate::domain::ports::{ConnectionRepo, TimeGetter};

/// Keeps the connections table in step with the websocket api
pub struct ConnectionRegistry<C, T> {
    connections: C,
    time: T,
}

impl<C, T> ConnectionRegistry<C, T>
where
    C: ConnectionRepo,
    T: TimeGetter,
{
    pub fn new(connections: C, time: T) -> Self {
        ConnectionRegistry { connections, time }
    }

    /// register a freshly opened connection
    #[tracing::instrument(err, skip(self))]
    pub async fn connect(&self, connection_id: &str) -> anyhow::Result<Connection> {
        let connection = Connection {
            id: connection_id.to_string(),
            timestamp: format_timestamp(self.time.now()),
        };
        self.connections.put_connection(&connection).await?;

        tracing::info!("connection registered");
        Ok(connection)
    }

    /// forget a closed connection
    #[tracing::instrument(err, skip(self))]
    pub async fn disconnect(&self, connection_id: &str) -> anyhow::Result<()> {
        self.connections.delete_connection(connection_id).await?;

        tracing::info!("connection removed");
        Ok(())
    }
}
