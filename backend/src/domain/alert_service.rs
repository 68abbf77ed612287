//! Background weather alert sweep.
//!
//! Every pass fetches current weather for each user with stored coordinates
//! and weather alerts enabled, pushes a fresh reading to any open session,
//! and files threshold alerts through the notifier. A provider failure for
//! one user never stops the pass; only a failure to list recipients fails
//! the tick.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tracing::{debug, warn};

use super::alerts::{threshold_for, triggered_alerts, within_cooldown};
use super::geo::Coordinates;
use super::notifier::Notifier;
use super::ports::{
    NotificationRepository, PushChannel, PushFrame, UserRepository, WeatherSource,
};
use super::sweep::{PeriodicTask, TickError};
use super::user::AlertRecipient;

pub struct WeatherAlertSweep {
    users: Arc<dyn UserRepository>,
    weather: Arc<dyn WeatherSource>,
    inbox: Arc<dyn NotificationRepository>,
    push: Arc<dyn PushChannel>,
    notifier: Arc<Notifier>,
}

impl WeatherAlertSweep {
    pub fn new(
        users: Arc<dyn UserRepository>,
        weather: Arc<dyn WeatherSource>,
        inbox: Arc<dyn NotificationRepository>,
        push: Arc<dyn PushChannel>,
        notifier: Arc<Notifier>,
    ) -> Self {
        Self {
            users,
            weather,
            inbox,
            push,
            notifier,
        }
    }

    /// Run one pass at the given instant.
    pub async fn sweep_once(&self, now: NaiveDateTime) -> Result<(), TickError> {
        let recipients = self
            .users
            .list_alert_recipients()
            .await
            .map_err(|err| TickError::new(err.to_string()))?;
        debug!(recipients = recipients.len(), "weather sweep pass");
        for recipient in recipients {
            self.check_recipient(&recipient, now).await;
        }
        Ok(())
    }

    async fn check_recipient(&self, recipient: &AlertRecipient, now: NaiveDateTime) {
        let coords = Coordinates::new(recipient.latitude, recipient.longitude);
        let reading = match self.weather.current_by_coords(coords).await {
            Ok(reading) => reading,
            Err(err) => {
                warn!(user_id = %recipient.user_id, error = %err, "weather fetch failed");
                return;
            }
        };
        self.push
            .push(
                recipient.user_id,
                PushFrame::WeatherUpdate {
                    reading: reading.clone(),
                },
            )
            .await;

        for alert in triggered_alerts(&reading) {
            let threshold = threshold_for(alert.kind);
            let last_sent = match self
                .inbox
                .latest_matching(recipient.user_id, threshold.message)
                .await
            {
                Ok(last) => last,
                Err(err) => {
                    warn!(user_id = %recipient.user_id, error = %err, "cooldown lookup failed");
                    continue;
                }
            };
            if within_cooldown(threshold, last_sent, now) {
                continue;
            }
            let frame = PushFrame::WeatherAlert {
                alert: alert.clone(),
            };
            if let Err(err) = self
                .notifier
                .notify(recipient.user_id, &alert.message, now, frame)
                .await
            {
                warn!(user_id = %recipient.user_id, error = %err, "alert delivery failed");
            }
        }
    }
}

#[async_trait]
impl PeriodicTask for WeatherAlertSweep {
    fn name(&self) -> &'static str {
        "weather_alerts"
    }

    async fn tick(&self) -> Result<(), TickError> {
        self.sweep_once(Utc::now().naive_utc()).await
    }
}
