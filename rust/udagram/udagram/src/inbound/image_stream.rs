//! Changes of the images table arrive as dynamodb stream records

use anyhow::Context;
use aws_lambda_events::event::dynamodb::{Event, EventRecord};
use model_udagram::image::Image;

use crate::domain::models::{ChangeKind, ImageChange};

/// Decodes a single stream record
pub fn image_change(record: &EventRecord) -> anyhow::Result<ImageChange> {
    let kind = ChangeKind::from_event_name(&record.event_name)
        .with_context(|| format!("unknown event name {}", record.event_name))?;

    Ok(match kind {
        ChangeKind::Insert => {
            let image: Image = serde_dynamo::from_item(record.change.new_image.clone())
                .context("new image is not an image record")?;
            ImageChange::Insert(image)
        }
        ChangeKind::Modify => ImageChange::Modify,
        ChangeKind::Remove => ImageChange::Remove,
    })
}

/// Decodes every record of a batch. Records that cannot be decoded are logged and dropped.
pub fn image_changes(event: &Event) -> Vec<ImageChange> {
    event
        .records
        .iter()
        .filter_map(|record| match image_change(record) {
            Ok(change) => Some(change),
            Err(e) => {
                tracing::error!(error = ?e, event_id = %record.event_id, "unable to decode stream record");
                None
            }
        })
        .collect()
}
