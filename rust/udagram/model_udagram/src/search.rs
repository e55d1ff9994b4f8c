use serde::{Deserialize, Serialize};

use crate::image::Image;

/// The document indexed for every image
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageDocument {
    /// Also used as the document id
    pub image_id: String,
    /// The group this image belongs to
    pub group_id: String,
    /// Public url of the image
    pub image_url: String,
    /// User provided title
    pub title: String,
    /// RFC 3339 creation time
    pub timestamp: String,
}

impl From<Image> for ImageDocument {
    fn from(image: Image) -> Self {
        Self {
            image_id: image.image_id,
            group_id: image.group_id,
            image_url: image.image_url,
            title: image.title,
            timestamp: image.timestamp,
        }
    }
}
