//! Pushes messages to clients connected to the websocket api through the api gateway management api.
use aws_config::SdkConfig;
use aws_sdk_apigatewaymanagement::{Client, config, primitives::Blob};
use thiserror::Error;

/// The ways posting to a connection can fail
#[derive(Debug, Error)]
pub enum PostErr {
    /// The client went away without a `$disconnect`, the connection will never accept data again
    #[error("connection {0} is gone")]
    Gone(String),
    /// Any other failure, the connection may still be alive
    #[error("failed to post to connection {connection_id}: {source:?}")]
    Failed {
        connection_id: String,
        source: anyhow::Error,
    },
}

#[derive(Clone, Debug)]
pub struct WebsocketGateway {
    inner: Client,
}

impl WebsocketGateway {
    /// Creates a client which posts through the callback url of the deployed websocket api stage
    pub fn new(config: &SdkConfig, endpoint_url: &str) -> Self {
        let api_management_config = config::Builder::from(config)
            .endpoint_url(endpoint_url)
            .build();
        Self {
            inner: Client::from_conf(api_management_config),
        }
    }

    /// Sends the data to a single connection
    #[tracing::instrument(skip(self, data), fields(data_len = data.len()))]
    pub async fn post_to_connection(&self, connection_id: &str, data: &[u8]) -> Result<(), PostErr> {
        let result = self
            .inner
            .post_to_connection()
            .connection_id(connection_id)
            .data(Blob::new(data))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let gone = err
                    .as_service_error()
                    .is_some_and(|e| e.is_gone_exception())
                    || err.raw_response().map(|r| r.status().as_u16()) == Some(410);

                if gone {
                    Err(PostErr::Gone(connection_id.to_string()))
                } else {
                    Err(PostErr::Failed {
                        connection_id: connection_id.to_string(),
                        source: err.into(),
                    })
                }
            }
        }
    }
}

/// The management endpoint of a websocket api stage
pub fn callback_url(api_id: &str, region: &str, stage: &str) -> String {
    format!("https://{api_id}.execute-api.{region}.amazonaws.com/{stage}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_the_stage_callback_url() {
        assert_eq!(
            callback_url("abc123", "us-east-1", "dev"),
            "https://abc123.execute-api.us-east-1.amazonaws.com/dev"
        );
    }

    #[test]
    fn gone_names_the_connection() {
        let err = PostErr::Gone("L0SM9cOFvHcCIhw=".to_string());
        assert_eq!(err.to_string(), "connection L0SM9cOFvHcCIhw= is gone");
    }
}
