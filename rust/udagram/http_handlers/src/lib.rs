//! Lambda handlers of the udagram http api.
//!
//! Every route is its own binary under `src/bin`, they share the wiring in [config]
//! and the request handling in [handlers].

pub mod config;
pub mod handlers;
mod response;
