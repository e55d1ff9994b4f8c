use websocket_gateway_client::{PostErr, WebsocketGateway};

use crate::domain::{models::DeliveryErr, ports::ConnectionNotifier};

impl From<PostErr> for DeliveryErr {
    fn from(err: PostErr) -> Self {
        match err {
            PostErr::Gone(_) => DeliveryErr::Gone,
            failed @ PostErr::Failed { .. } => DeliveryErr::Failed(failed.into()),
        }
    }
}

impl ConnectionNotifier for WebsocketGateway {
    async fn post(&self, connection_id: &str, payload: &[u8]) -> Result<(), DeliveryErr> {
        Ok(self.post_to_connection(connection_id, payload).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cool_asserts::assert_matches;

    #[test]
    fn gone_connections_are_stale() {
        let err: DeliveryErr = PostErr::Gone("abc=".to_string()).into();
        assert_matches!(err, DeliveryErr::Gone);
    }

    #[test]
    fn other_failures_keep_their_cause() {
        let err: DeliveryErr = PostErr::Failed {
            connection_id: "abc=".to_string(),
            source: anyhow::anyhow!("throttled"),
        }
        .into();

        assert_matches!(err, DeliveryErr::Failed(e) => {
            assert!(e.to_string().contains("abc="));
        });
    }
}
