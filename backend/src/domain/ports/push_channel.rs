//! Port for real-time push delivery to connected clients.
//!
//! Delivery is fire and forget: a user with no open session simply misses
//! the frame, and the durable inbox remains the source of truth.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::alerts::{Alert, WeatherReading};
use crate::domain::user::UserId;

/// Frame pushed over an open session.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum PushFrame {
    /// Fresh reading for the user's stored location.
    WeatherUpdate { reading: WeatherReading },
    /// A threshold fired for the user's location.
    WeatherAlert { alert: Alert },
    /// A watering schedule came due.
    WateringReminder { crop_name: String, message: String },
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PushChannel: Send + Sync {
    /// Push a frame to the user's open sessions, if any.
    async fn push(&self, user_id: UserId, frame: PushFrame);
}

/// Fixture channel that drops every frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePushChannel;

#[async_trait]
impl PushChannel for FixturePushChannel {
    async fn push(&self, _user_id: UserId, _frame: PushFrame) {}
}
