#[derive(thiserror::Error, Debug, serde::Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum OpensearchClientError {
    #[error("error deserializing response body. method: {method:?} details: {details}")]
    DeserializationFailed {
        details: String,
        method: Option<String>,
    },
    #[error("a network error occurred. status_code: {status_code} message: {message}")]
    NetworkError { status_code: u16, message: String },

    #[error("an unknown error occurred. method: {method:?} details: {details}")]
    Unknown {
        details: String,
        method: Option<String>,
    },
}

impl From<anyhow::Error> for OpensearchClientError {
    fn from(err: anyhow::Error) -> Self {
        OpensearchClientError::Unknown {
            details: err.to_string(),
            method: None,
        }
    }
}
