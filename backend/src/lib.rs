//! PocketFarm backend library.
//!
//! Hexagonal layout: `domain` holds the model, ports, and services;
//! `inbound` the HTTP and WebSocket adapters; `outbound` the store and
//! external HTTP clients; `server` the wiring.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;
