//! Implementations of the domain ports on top of the aws service clients.
//! Each port is implemented directly on the client type that backs it.

pub mod dynamodb;
pub mod opensearch;
pub mod s3;
pub mod secret;
pub mod time;
pub mod websocket;
