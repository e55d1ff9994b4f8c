use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use udagram::{
    domain::{
        ports::{ConnectionNotifier, ConnectionRepo},
        service::UploadNotifier,
    },
    inbound::s3_notification::uploaded_keys,
};

/// Fans every uploaded key out to the connected clients
#[tracing::instrument(skip_all)]
pub async fn handler<C, N>(
    notifier: &UploadNotifier<C, N>,
    event: LambdaEvent<SnsEvent>,
) -> Result<(), Error>
where
    C: ConnectionRepo,
    N: ConnectionNotifier,
{
    let keys = uploaded_keys(&event.payload);
    tracing::info!(
        records = event.payload.records.len(),
        uploads = keys.len(),
        "processing upload notifications"
    );

    for key in keys {
        let summary = notifier.notify_upload(&key).await?;
        tracing::info!(
            image_id = %key,
            delivered = summary.delivered,
            pruned = summary.pruned,
            failed = summary.failed,
            "notified connections"
        );
    }

    Ok(())
}
