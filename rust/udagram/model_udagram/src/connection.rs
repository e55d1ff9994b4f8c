use serde::{Deserialize, Serialize};

/// An active websocket connection
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    /// The connection id assigned by api gateway
    pub id: String,
    /// RFC 3339 time the connection was opened
    pub timestamp: String,
}

/// Key of the connections table
#[derive(Serialize, Debug)]
pub struct ConnectionTableKey<'a> {
    /// The connection id
    pub id: &'a str,
}

/// The message pushed to every connection when an image has been uploaded
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadNotification<'a> {
    /// The object key of the upload, which is the image id
    pub image_id: &'a str,
}
