//! HTTP inbound adapter exposing REST endpoints.

pub mod crops;
pub mod error;
pub mod health;
pub mod library;
pub mod notifications;
pub mod nurseries;
pub mod recommendations;
pub mod schedules;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod weather;

pub use error::ApiResult;
pub use state::AppState;
