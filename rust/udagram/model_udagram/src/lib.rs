#![deny(missing_docs)]
//! Serde models shared by the udagram clients, domain and lambda handlers.
//!
//! Field names are camelCase on the wire and in the dynamodb tables.

/// API Gateway authorizer policy documents
pub mod authorizer;
/// WebSocket connection registry records
pub mod connection;
/// JSON error bodies returned by the http api
pub mod error_response;
/// Group records and requests
pub mod group;
/// Image records and requests
pub mod image;
/// Search index documents
pub mod search;
