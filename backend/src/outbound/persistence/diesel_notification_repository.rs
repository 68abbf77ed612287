//! Diesel-backed notification inbox.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use diesel::prelude::*;

use crate::domain::notifications::Notification;
use crate::domain::ports::{NotificationRepository, NotificationRepositoryError};
use crate::domain::user::UserId;

use super::models::{NewNotificationRow, NotificationRow};
use super::pool::{DbPool, PoolError};
use super::schema::notifications;

pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> NotificationRepositoryError {
    match err {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            NotificationRepositoryError::connection(message)
        }
        other => NotificationRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn insert(
        &self,
        user_id: UserId,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<Notification, NotificationRepositoryError> {
        let row = NewNotificationRow {
            user_id: user_id.get(),
            message: message.to_owned(),
            timestamp,
            read_status: false,
        };
        let inserted = self
            .pool
            .run(move |conn| {
                diesel::insert_into(notifications::table)
                    .values(&row)
                    .returning(NotificationRow::as_returning())
                    .get_result(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(inserted.into_notification())
    }

    async fn list(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let uid = user_id.get();
        let rows = self
            .pool
            .run(move |conn| {
                notifications::table
                    .filter(notifications::user_id.eq(uid))
                    .order(notifications::timestamp.desc())
                    .select(NotificationRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows
            .into_iter()
            .map(NotificationRow::into_notification)
            .collect())
    }

    async fn mark_all_read(
        &self,
        user_id: UserId,
    ) -> Result<usize, NotificationRepositoryError> {
        let uid = user_id.get();
        self.pool
            .run(move |conn| {
                diesel::update(notifications::table.filter(notifications::user_id.eq(uid)))
                    .set(notifications::read_status.eq(true))
                    .execute(conn)
            })
            .await
            .map_err(map_pool_error)
    }

    async fn clear(&self, user_id: UserId) -> Result<usize, NotificationRepositoryError> {
        let uid = user_id.get();
        self.pool
            .run(move |conn| {
                diesel::delete(notifications::table.filter(notifications::user_id.eq(uid)))
                    .execute(conn)
            })
            .await
            .map_err(map_pool_error)
    }

    async fn latest_matching(
        &self,
        user_id: UserId,
        message: &str,
    ) -> Result<Option<NaiveDateTime>, NotificationRepositoryError> {
        let uid = user_id.get();
        let message = message.to_owned();
        self.pool
            .run(move |conn| {
                notifications::table
                    .filter(notifications::user_id.eq(uid))
                    .filter(notifications::message.eq(&message))
                    .order(notifications::timestamp.desc())
                    .select(notifications::timestamp)
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)
    }

    async fn exists_on_day(
        &self,
        user_id: UserId,
        message: &str,
        day: NaiveDate,
    ) -> Result<bool, NotificationRepositoryError> {
        let uid = user_id.get();
        let message = message.to_owned();
        let day_start = day.and_hms_opt(0, 0, 0).unwrap_or_default();
        let day_end = day_start + TimeDelta::days(1);
        let count: i64 = self
            .pool
            .run(move |conn| {
                notifications::table
                    .filter(notifications::user_id.eq(uid))
                    .filter(notifications::message.eq(&message))
                    .filter(notifications::timestamp.ge(day_start))
                    .filter(notifications::timestamp.lt(day_end))
                    .count()
                    .get_result(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(count > 0)
    }
}
