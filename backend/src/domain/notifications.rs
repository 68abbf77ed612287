//! Notification inbox data model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::UserId;

/// One inbox entry for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i32,
    pub user_id: UserId,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub read_status: bool,
}

/// Per-user opt-in flags for the two notification categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub watering_reminders: bool,
    pub weather_alerts: bool,
}

impl Default for NotificationPreferences {
    /// New accounts start with both categories enabled.
    fn default() -> Self {
        Self {
            watering_reminders: true,
            weather_alerts: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_categories() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.watering_reminders);
        assert!(prefs.weather_alerts);
    }
}
