use anyhow::Context;
use model_udagram::connection::UploadNotification;

use crate::domain::{
    models::{DeliveryErr, FanOutSummary},
    ports::{ConnectionNotifier, ConnectionRepo},
};

/// Tells every connected websocket client that an image was uploaded
pub struct UploadNotifier<C, N> {
    connections: C,
    notifier: N,
}

impl<C, N> UploadNotifier<C, N>
where
    C: ConnectionRepo,
    N: ConnectionNotifier,
{
    pub fn new(connections: C, notifier: N) -> Self {
        UploadNotifier {
            connections,
            notifier,
        }
    }

    /// Posts `{"imageId": ...}` to every registered connection.
    ///
    /// The frame is the JSON object itself. Earlier clients received it encoded twice, as a JSON
    /// string holding the object, and must now parse the frame once.
    ///
    /// Connections the gateway reports as gone are removed from the registry.
    /// Any other delivery failure is logged and the fan-out moves on.
    #[tracing::instrument(err, skip(self))]
    pub async fn notify_upload(&self, image_id: &str) -> anyhow::Result<FanOutSummary> {
        let payload = serde_json::to_vec(&UploadNotification { image_id })
            .context("unable to serialize notification")?;

        let connections = self.connections.list_connections().await?;
        tracing::debug!(count = connections.len(), "notifying connections");

        let mut summary = FanOutSummary::default();

        for connection in connections {
            match self.notifier.post(&connection.id, &payload).await {
                Ok(()) => summary.delivered += 1,
                Err(DeliveryErr::Gone) => {
                    tracing::info!(connection_id = %connection.id, "removing stale connection");
                    match self.connections.delete_connection(&connection.id).await {
                        Ok(()) => summary.pruned += 1,
                        Err(e) => {
                            tracing::warn!(error = ?e, connection_id = %connection.id, "unable to remove stale connection");
                            summary.failed += 1;
                        }
                    }
                }
                Err(DeliveryErr::Failed(e)) => {
                    tracing::warn!(error = ?e, connection_id = %connection.id, "unable to notify connection");
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockConnectionNotifier, MockConnectionRepo};
    use model_udagram::connection::Connection;
    use mockall::predicate::eq;

    fn connection(id: &str) -> Connection {
        Connection {
            id: id.to_string(),
            timestamp: "2022-05-01T12:00:00.000Z".to_string(),
        }
    }

    fn repo_with(ids: &'static [&'static str]) -> MockConnectionRepo {
        let mut repo = MockConnectionRepo::new();
        repo.expect_list_connections().times(1).returning(move || {
            let connections = ids.iter().map(|id| connection(id)).collect();
            Box::pin(async move { Ok(connections) })
        });
        repo
    }

    #[tokio::test]
    async fn only_the_stale_connection_is_removed() {
        let mut repo = repo_with(&["a", "stale", "c"]);
        repo.expect_delete_connection()
            .with(eq("stale"))
            .times(1)
            .returning(|_| Box::pin(async { Ok(()) }));

        let mut notifier = MockConnectionNotifier::new();
        notifier
            .expect_post()
            .withf(|_, payload| payload == br#"{"imageId":"img-1"}"#)
            .times(3)
            .returning(|id, _| {
                let res = if id == "stale" {
                    Err(DeliveryErr::Gone)
                } else {
                    Ok(())
                };
                Box::pin(async move { res })
            });

        let summary = UploadNotifier::new(repo, notifier)
            .notify_upload("img-1")
            .await
            .unwrap();

        assert_eq!(
            summary,
            FanOutSummary {
                delivered: 2,
                pruned: 1,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn other_failures_keep_the_connection() {
        let mut repo = repo_with(&["a", "b"]);
        repo.expect_delete_connection().never();

        let mut notifier = MockConnectionNotifier::new();
        notifier.expect_post().times(2).returning(|id, _| {
            let res = if id == "a" {
                Err(DeliveryErr::Failed(anyhow::anyhow!("throttled")))
            } else {
                Ok(())
            };
            Box::pin(async move { res })
        });

        let summary = UploadNotifier::new(repo, notifier)
            .notify_upload("img-1")
            .await
            .unwrap();

        assert_eq!(summary.delivered, 1);
        assert_eq!(summary.failed, 1);
    }

    #[tokio::test]
    async fn no_connections_is_a_no_op() {
        let repo = repo_with(&[]);
        let mut notifier = MockConnectionNotifier::new();
        notifier.expect_post().never();

        let summary = UploadNotifier::new(repo, notifier)
            .notify_upload("img-1")
            .await
            .unwrap();

        assert_eq!(summary, FanOutSummary::default());
    }

    #[tokio::test]
    async fn a_failed_scan_fails_the_fan_out() {
        let mut repo = MockConnectionRepo::new();
        repo.expect_list_connections()
            .returning(|| Box::pin(async { Err(anyhow::anyhow!("throttled")) }));

        let res = UploadNotifier::new(repo, MockConnectionNotifier::new())
            .notify_upload("img-1")
            .await;

        assert!(res.is_err());
    }
}
