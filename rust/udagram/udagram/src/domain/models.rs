use model_udagram::image::Image;
use thiserror::Error;

/// Errors returned by the gallery api
#[derive(Debug, Error)]
pub enum GalleryErr {
    #[error("Group does not exist")]
    GroupNotFound,
    #[error("Image does not exist")]
    ImageNotFound,
    /// the request passed the gateway but does not describe a valid item
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Why posting to a websocket connection failed
#[derive(Debug, Error)]
pub enum DeliveryErr {
    /// the connection no longer exists and should be removed from the registry
    #[error("stale connection")]
    Gone,
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Why a bearer token was rejected
#[derive(Debug, Error)]
pub enum AuthorizerErr {
    #[error("No authorization header")]
    MissingHeader,
    #[error("Invalid authorization header")]
    InvalidHeader,
    #[error("unable to read signing secret: {0:?}")]
    Secret(anyhow::Error),
    #[error("invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// Settings of the gallery api
#[derive(Debug, Clone)]
pub struct GalleryConfig {
    /// The bucket clients upload images to
    pub images_bucket: String,
    /// How long a presigned upload url stays valid
    pub url_expiration_seconds: u64,
}

/// Buckets used by the thumbnail generator
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    pub images_bucket: String,
    pub thumbnails_bucket: String,
}

/// The kind of a row level change of the images table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Insert,
    Modify,
    Remove,
}

impl ChangeKind {
    /// Parses the `eventName` of a dynamodb stream record
    pub fn from_event_name(name: &str) -> Option<Self> {
        match name {
            "INSERT" => Some(ChangeKind::Insert),
            "MODIFY" => Some(ChangeKind::Modify),
            "REMOVE" => Some(ChangeKind::Remove),
            _ => None,
        }
    }
}

/// A decoded change of the images table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageChange {
    /// a new image record, carrying the new image
    Insert(Image),
    Modify,
    Remove,
}

/// What happened to a single change during search sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Indexed,
    Ignored,
}

/// Counts of a search sync batch
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncSummary {
    pub indexed: usize,
    pub ignored: usize,
    pub failed: usize,
}

/// Counts of a single upload fan-out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FanOutSummary {
    pub delivered: usize,
    pub pruned: usize,
    pub failed: usize,
}

/// The claims udagram reads from a verified token
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TokenClaims {
    /// the subject, reported as the principal id
    pub sub: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_stream_event_names() {
        assert_eq!(ChangeKind::from_event_name("INSERT"), Some(ChangeKind::Insert));
        assert_eq!(ChangeKind::from_event_name("MODIFY"), Some(ChangeKind::Modify));
        assert_eq!(ChangeKind::from_event_name("REMOVE"), Some(ChangeKind::Remove));
        assert_eq!(ChangeKind::from_event_name("insert"), None);
    }

    #[test]
    fn not_found_messages_match_the_api_contract() {
        assert_eq!(GalleryErr::GroupNotFound.to_string(), "Group does not exist");
        assert_eq!(GalleryErr::ImageNotFound.to_string(), "Image does not exist");
    }
}
