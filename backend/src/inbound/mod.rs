//! Inbound adapters: HTTP REST endpoints and WebSocket sessions.

pub mod http;
pub mod ws;
