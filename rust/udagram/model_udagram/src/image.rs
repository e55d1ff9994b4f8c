use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An image record as stored in the images table.
///
/// The table is keyed on (`groupId`, `timestamp`) and has a global secondary index on `imageId`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// The group this image belongs to
    pub group_id: String,
    /// RFC 3339 creation time, the sort key of the table
    pub timestamp: String,
    /// Unique id of the image, also the object key in the images bucket
    pub image_id: String,
    /// User provided title
    pub title: String,
    /// Public url of the uploaded object
    pub image_url: String,
    /// Attributes the api does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Image {
    /// Builds the record for a freshly created image
    pub fn new(
        group_id: &str,
        image_id: &str,
        req: NewImage,
        created_at: DateTime<Utc>,
        bucket: &str,
    ) -> Self {
        let mut extra = req.extra;
        for key in ["groupId", "timestamp", "imageId", "imageUrl"] {
            extra.remove(key);
        }

        Self {
            group_id: group_id.to_string(),
            timestamp: format_timestamp(created_at),
            image_id: image_id.to_string(),
            title: req.title,
            image_url: image_url(bucket, image_id),
            extra,
        }
    }
}

/// Formats a timestamp the way the images table sorts it, millisecond precision in UTC
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The public url of an object in the images bucket
pub fn image_url(bucket: &str, image_id: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/{image_id}")
}

/// The body of a `POST /groups/{groupId}/images` request
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewImage {
    /// User provided title
    pub title: String,
    /// Any other field of the body, stored as is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewImage {
    /// A request carrying only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extra: Map::new(),
        }
    }
}

/// The response of a successful image creation
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedImage {
    /// The stored record
    pub new_item: Image,
    /// Presigned url the client uses to PUT the image bytes
    pub upload_url: String,
}
