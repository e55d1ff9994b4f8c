//! The udagram domain: the image gallery api, the websocket connection registry,
//! and the consumers reacting to uploads and to changes of the images table.
//!
//! [domain::ports] defines the interfaces the services depend on,
//! [outbound] implements them on top of the aws clients,
//! `inbound` (behind the `inbound` feature) decodes the lambda events that drive them.
pub mod domain;
#[cfg(feature = "inbound")]
pub mod inbound;
pub mod outbound;
