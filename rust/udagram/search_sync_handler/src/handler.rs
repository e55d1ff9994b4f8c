use aws_lambda_events::event::dynamodb::Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};
use udagram::{
    domain::{ports::SearchIndex, service::SearchSync},
    inbound::image_stream::image_changes,
};

/// Indexes the images inserted into the images table.
/// Records that fail are logged, the invocation still succeeds.
#[tracing::instrument(skip_all)]
pub async fn handler<S: SearchIndex>(
    sync: &SearchSync<S>,
    event: LambdaEvent<Event>,
) -> Result<(), Error> {
    let records = event.payload.records.len();
    let changes = image_changes(&event.payload);
    let undecodable = records - changes.len();

    let summary = sync.sync_all(changes).await;

    tracing::info!(
        records,
        indexed = summary.indexed,
        ignored = summary.ignored,
        failed = summary.failed + undecodable,
        "processed stream batch"
    );

    Ok(())
}
