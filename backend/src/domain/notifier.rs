//! Durable notification delivery with real-time push.
//!
//! The inbox insert is the part that must not be lost, so it retries with
//! exponential backoff and jitter before giving up. The push is fire and
//! forget: a user without an open session reads the inbox later.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use super::notifications::Notification;
use super::ports::{NotificationRepository, NotificationRepositoryError, PushChannel, PushFrame};
use super::sweep::Sleeper;
use super::user::UserId;

const INSERT_ATTEMPTS: u32 = 3;
const BACKOFF_BASE_MS: u64 = 500;
const JITTER_MAX_MS: u64 = 250;

pub struct Notifier {
    inbox: Arc<dyn NotificationRepository>,
    push: Arc<dyn PushChannel>,
    sleeper: Arc<dyn Sleeper>,
}

impl Notifier {
    pub fn new(
        inbox: Arc<dyn NotificationRepository>,
        push: Arc<dyn PushChannel>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            inbox,
            push,
            sleeper,
        }
    }

    /// Insert an inbox entry, retrying transient failures, then push the
    /// frame to any open session.
    pub async fn notify(
        &self,
        user_id: UserId,
        message: &str,
        timestamp: NaiveDateTime,
        frame: PushFrame,
    ) -> Result<Notification, NotificationRepositoryError> {
        let notification = self.insert_with_retry(user_id, message, timestamp).await?;
        self.push.push(user_id, frame).await;
        Ok(notification)
    }

    async fn insert_with_retry(
        &self,
        user_id: UserId,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Notification, NotificationRepositoryError> {
        let mut rng = SmallRng::from_entropy();
        let mut attempt = 0;
        loop {
            match self.inbox.insert(user_id, message, timestamp).await {
                Ok(notification) => return Ok(notification),
                Err(err) if attempt + 1 < INSERT_ATTEMPTS => {
                    warn!(
                        user_id = %user_id,
                        attempt,
                        error = %err,
                        "notification insert failed, retrying"
                    );
                    let backoff = BACKOFF_BASE_MS << attempt;
                    let jitter = rng.gen_range(0..=JITTER_MAX_MS);
                    self.sleeper
                        .sleep(Duration::from_millis(backoff + jitter))
                        .await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
