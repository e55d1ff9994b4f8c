use model_udagram::search::ImageDocument;

use crate::{Result, error::OpensearchClientError};

#[tracing::instrument(skip(client))]
pub(crate) async fn upsert_image(
    client: &opensearch::OpenSearch,
    index: &str,
    document: &ImageDocument,
) -> Result<()> {
    let response = client
        .index(opensearch::IndexParts::IndexId(index, &document.image_id))
        .body(document)
        .send()
        .await
        .map_err(|err| OpensearchClientError::Unknown {
            details: err.to_string(),
            method: Some("upsert_image".to_string()),
        })?;

    let status_code = response.status_code();
    if status_code.is_success() {
        tracing::trace!(id=%document.image_id, "image upserted successfully");
        return Ok(());
    }

    let body = response
        .text()
        .await
        .map_err(|err| OpensearchClientError::DeserializationFailed {
            details: err.to_string(),
            method: Some("upsert_image".to_string()),
        })?;

    tracing::error!(
        status_code=?status_code,
        body=?body,
        "error upserting image",
    );

    Err(OpensearchClientError::NetworkError {
        status_code: status_code.as_u16(),
        message: body,
    })
}
