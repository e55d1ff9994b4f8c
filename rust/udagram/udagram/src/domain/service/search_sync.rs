use model_udagram::search::ImageDocument;

use crate::domain::{
    models::{ImageChange, SyncOutcome, SyncSummary},
    ports::SearchIndex,
};

/// Projects new image records into the search index
pub struct SearchSync<S> {
    index: S,
}

impl<S> SearchSync<S>
where
    S: SearchIndex,
{
    pub fn new(index: S) -> Self {
        SearchSync { index }
    }

    /// Indexes inserted images. Modified and removed records are left alone.
    #[tracing::instrument(err, skip(self, change))]
    pub async fn sync(&self, change: ImageChange) -> anyhow::Result<SyncOutcome> {
        match change {
            ImageChange::Insert(image) => {
                let document = ImageDocument::from(image);
                self.index.index_image(&document).await?;
                tracing::info!(image_id = %document.image_id, "indexed image");
                Ok(SyncOutcome::Indexed)
            }
            ImageChange::Modify | ImageChange::Remove => Ok(SyncOutcome::Ignored),
        }
    }

    /// Syncs every change in order. A failing change is counted and does not stop the batch.
    pub async fn sync_all(&self, changes: impl IntoIterator<Item = ImageChange>) -> SyncSummary {
        let mut summary = SyncSummary::default();

        for change in changes {
            match self.sync(change).await {
                Ok(SyncOutcome::Indexed) => summary.indexed += 1,
                Ok(SyncOutcome::Ignored) => summary.ignored += 1,
                Err(e) => {
                    tracing::error!(error = ?e, "unable to index image");
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}
