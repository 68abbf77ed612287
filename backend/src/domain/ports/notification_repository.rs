//! Port for the notification inbox.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::notifications::Notification;
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by notification repository adapters.
    pub enum NotificationRepositoryError {
        Connection { message: String } =>
            "notification repository connection failed: {message}",
        Query { message: String } =>
            "notification repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(
        &self,
        user_id: UserId,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Notification, NotificationRepositoryError>;

    /// Inbox entries for a user, newest first.
    async fn list(&self, user_id: UserId)
        -> Result<Vec<Notification>, NotificationRepositoryError>;

    /// Mark every entry read. Returns the number of rows updated.
    async fn mark_all_read(&self, user_id: UserId)
        -> Result<usize, NotificationRepositoryError>;

    /// Delete every entry. Returns the number of rows removed.
    async fn clear(&self, user_id: UserId) -> Result<usize, NotificationRepositoryError>;

    /// Timestamp of the most recent entry carrying `message`, for alert
    /// cooldown checks.
    async fn latest_matching(
        &self,
        user_id: UserId,
        message: &str,
    ) -> Result<Option<NaiveDateTime>, NotificationRepositoryError>;

    /// True when an entry carrying `message` already exists on `day`, for
    /// same-day watering reminder dedup.
    async fn exists_on_day(
        &self,
        user_id: UserId,
        message: &str,
        day: NaiveDate,
    ) -> Result<bool, NotificationRepositoryError>;
}

/// Fixture inbox that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureNotificationRepository;

#[async_trait]
impl NotificationRepository for FixtureNotificationRepository {
    async fn insert(
        &self,
        user_id: UserId,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Notification, NotificationRepositoryError> {
        Ok(Notification {
            id: 0,
            user_id,
            message: message.to_owned(),
            timestamp,
            read_status: false,
        })
    }

    async fn list(
        &self,
        _user_id: UserId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        Ok(Vec::new())
    }

    async fn mark_all_read(
        &self,
        _user_id: UserId,
    ) -> Result<usize, NotificationRepositoryError> {
        Ok(0)
    }

    async fn clear(&self, _user_id: UserId) -> Result<usize, NotificationRepositoryError> {
        Ok(0)
    }

    async fn latest_matching(
        &self,
        _user_id: UserId,
        _message: &str,
    ) -> Result<Option<NaiveDateTime>, NotificationRepositoryError> {
        Ok(None)
    }

    async fn exists_on_day(
        &self,
        _user_id: UserId,
        _message: &str,
        _day: NaiveDate,
    ) -> Result<bool, NotificationRepositoryError> {
        Ok(false)
    }
}
