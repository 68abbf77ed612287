//! Diesel-backed user repository.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::domain::notifications::NotificationPreferences;
use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::user::{AlertRecipient, AuthRecord, NewUser, User, UserId};

use super::models::{NewUserRow, NewVerificationTokenRow, PreferencesRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::{notification_preferences, users, verification_tokens};

pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(err: PoolError) -> UserRepositoryError {
    match err {
        PoolError::Build { message } | PoolError::Checkout { message } => {
            UserRepositoryError::connection(message)
        }
        other => UserRepositoryError::query(other.to_string()),
    }
}

fn is_unique_violation(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        let email = new_user.email.clone();
        let outcome = self
            .pool
            .run(move |conn| {
                conn.transaction(|conn| {
                    let row = NewUserRow {
                        name: new_user.name.clone(),
                        email: new_user.email.clone(),
                        password_hash: new_user.password_hash.clone(),
                        phone: new_user.phone.clone(),
                        location_city: new_user.location.city.clone(),
                        location_state: new_user.location.state.clone(),
                        location_country: new_user.location.country.clone(),
                        location_latitude: new_user.location.latitude,
                        location_longitude: new_user.location.longitude,
                    };
                    let inserted: Result<UserRow, DieselError> = diesel::insert_into(users::table)
                        .values(&row)
                        .returning(UserRow::as_returning())
                        .get_result(conn);
                    let inserted = match inserted {
                        Ok(inserted) => inserted,
                        Err(err) if is_unique_violation(&err) => return Ok(None),
                        Err(err) => return Err(err),
                    };

                    let defaults = NotificationPreferences::default();
                    diesel::insert_into(notification_preferences::table)
                        .values(&PreferencesRow {
                            user_id: inserted.id,
                            watering_reminders: defaults.watering_reminders,
                            weather_alerts: defaults.weather_alerts,
                        })
                        .execute(conn)?;

                    diesel::insert_into(verification_tokens::table)
                        .values(&NewVerificationTokenRow {
                            user_id: inserted.id,
                            token: Uuid::new_v4().to_string(),
                        })
                        .execute(conn)?;

                    Ok(Some(inserted.into_user()))
                })
            })
            .await
            .map_err(map_pool_error)?;
        outcome.ok_or_else(|| UserRepositoryError::email_taken(email))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AuthRecord>, UserRepositoryError> {
        let email = email.to_owned();
        let row = self
            .pool
            .run(move |conn| {
                users::table
                    .filter(users::email.eq(&email))
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?;
        Ok(row.map(UserRow::into_auth_record))
    }

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let id = user_id.get();
        let row = self
            .pool
            .run(move |conn| {
                users::table
                    .find(id)
                    .select(UserRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?;
        Ok(row.map(UserRow::into_user))
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let rows = self
            .pool
            .run(|conn| {
                users::table
                    .order(users::id.asc())
                    .select(UserRow::as_select())
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows.into_iter().map(UserRow::into_user).collect())
    }

    async fn delete(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let id = user_id.get();
        // Owned rows in every other table go with the account via ON DELETE
        // CASCADE; foreign keys are enabled per connection.
        let deleted = self
            .pool
            .run(move |conn| diesel::delete(users::table.find(id)).execute(conn))
            .await
            .map_err(map_pool_error)?;
        if deleted == 0 {
            return Err(UserRepositoryError::not_found(id));
        }
        Ok(())
    }

    async fn list_alert_recipients(&self) -> Result<Vec<AlertRecipient>, UserRepositoryError> {
        let rows: Vec<(i32, Option<f64>, Option<f64>)> = self
            .pool
            .run(|conn| {
                users::table
                    .inner_join(notification_preferences::table)
                    .filter(notification_preferences::weather_alerts.eq(true))
                    .filter(users::location_latitude.is_not_null())
                    .filter(users::location_longitude.is_not_null())
                    .select((
                        users::id,
                        users::location_latitude,
                        users::location_longitude,
                    ))
                    .load(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(rows
            .into_iter()
            .filter_map(|(id, lat, lon)| {
                Some(AlertRecipient {
                    user_id: UserId::new(id),
                    latitude: lat?,
                    longitude: lon?,
                })
            })
            .collect())
    }

    async fn preferences(
        &self,
        user_id: UserId,
    ) -> Result<Option<NotificationPreferences>, UserRepositoryError> {
        let id = user_id.get();
        let row = self
            .pool
            .run(move |conn| {
                notification_preferences::table
                    .find(id)
                    .select(PreferencesRow::as_select())
                    .first(conn)
                    .optional()
            })
            .await
            .map_err(map_pool_error)?;
        Ok(row.map(PreferencesRow::into_preferences))
    }

    async fn update_preferences(
        &self,
        user_id: UserId,
        preferences: NotificationPreferences,
    ) -> Result<(), UserRepositoryError> {
        let row = PreferencesRow {
            user_id: user_id.get(),
            watering_reminders: preferences.watering_reminders,
            weather_alerts: preferences.weather_alerts,
        };
        self.pool
            .run(move |conn| {
                diesel::insert_into(notification_preferences::table)
                    .values(&row)
                    .on_conflict(notification_preferences::user_id)
                    .do_update()
                    .set((
                        notification_preferences::watering_reminders.eq(row.watering_reminders),
                        notification_preferences::weather_alerts.eq(row.weather_alerts),
                    ))
                    .execute(conn)
            })
            .await
            .map_err(map_pool_error)?;
        Ok(())
    }
}
