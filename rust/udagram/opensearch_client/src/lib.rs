pub mod error;
pub mod upsert;

pub type Result<T> = std::result::Result<T, error::OpensearchClientError>;

use aws_config::SdkConfig;
use model_udagram::search::ImageDocument;
use opensearch::{
    OpenSearch,
    auth::Credentials,
    http::{
        Url,
        transport::{SingleNodeConnectionPool, TransportBuilder},
    },
    indices::{IndicesCreateParts, IndicesExistsParts},
};

pub static DEFAULT_IMAGES_INDEX: &str = "images";

/// The service name requests are signed for. Amazon Elasticsearch and OpenSearch domains share it.
static SIGNING_SERVICE: &str = "es";

#[derive(Clone, Debug)]
pub struct OpensearchClient {
    /// The opensearch client used to interact with opensearch api
    inner: opensearch::OpenSearch,
    /// The index image documents are written to
    index: String,
}

impl OpensearchClient {
    /// Creates a client for a managed domain, signing every request with the credentials of the aws config.
    ///
    /// `endpoint` is the bare domain endpoint as exported by the stack, without scheme.
    pub fn new_aws(endpoint: &str, aws_config: &SdkConfig, index: String) -> anyhow::Result<Self> {
        let url = Url::parse(&domain_url(endpoint))?;
        let credentials: Credentials = aws_config.clone().try_into()?;
        let conn_pool = SingleNodeConnectionPool::new(url);

        let transport = TransportBuilder::new(conn_pool)
            .auth(credentials)
            .service_name(SIGNING_SERVICE)
            .disable_proxy()
            .build()?;
        let client = OpenSearch::new(transport);
        Ok(Self {
            inner: client,
            index,
        })
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Checks if the image index exists, if not it will create it with [images_index_body]
    #[tracing::instrument(skip(self), fields(index = %self.index))]
    pub async fn ensure_index_exists(&self) -> anyhow::Result<()> {
        let exists = self
            .inner
            .indices()
            .exists(IndicesExistsParts::Index(&[self.index.as_str()]))
            .send()
            .await?;

        let exists = exists.status_code().is_success();

        tracing::trace!(exists=?exists, "checking if index exists");

        if !exists {
            let index_body = images_index_body();
            tracing::info!(index_body=?index_body, "index does not exist, creating...");
            let response = self
                .inner
                .indices()
                .create(IndicesCreateParts::Index(&self.index))
                .body(index_body)
                .send()
                .await?;

            if !response.status_code().is_success() {
                return Err(anyhow::anyhow!("error creating index: {response:?}"));
            }
        }

        Ok(())
    }

    /// Indexes the document under its image id, replacing any previous version
    pub async fn upsert_image(&self, document: &ImageDocument) -> Result<()> {
        upsert::image::upsert_image(&self.inner, &self.index, document).await
    }
}

/// Builds the url of a domain endpoint, which is exported without a scheme
fn domain_url(endpoint: &str) -> String {
    if endpoint.starts_with("https://") || endpoint.starts_with("http://") {
        endpoint.to_string()
    } else {
        format!("https://{endpoint}")
    }
}

/// The mappings of the image index.
/// Ids are matched exactly, the title is analysed for full text search.
pub fn images_index_body() -> serde_json::Value {
    serde_json::json!({
        "mappings": {
            "properties": {
                "imageId": { "type": "keyword" },
                "groupId": { "type": "keyword" },
                "imageUrl": { "type": "keyword", "index": false },
                "title": { "type": "text" },
                "timestamp": { "type": "date" }
            }
        }
    })
}
