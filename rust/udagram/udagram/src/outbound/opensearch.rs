use model_udagram::search::ImageDocument;
use opensearch_client::OpensearchClient;

use crate::domain::ports::SearchIndex;

impl SearchIndex for OpensearchClient {
    async fn index_image(&self, document: &ImageDocument) -> anyhow::Result<()> {
        Ok(self.upsert_image(document).await?)
    }
}
