//! Port for user account persistence.
//!
//! Account creation is transactional: the user row, its default notification
//! preferences, and a verification token are written together or not at all.
//! Account deletion removes every row owned by the user across all tables.

use async_trait::async_trait;

use crate::domain::notifications::NotificationPreferences;
use crate::domain::user::{AlertRecipient, AuthRecord, NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// Could not obtain a store connection.
        Connection { message: String } =>
            "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "user repository query failed: {message}",
        /// The email address is already registered.
        EmailTaken { email: String } =>
            "email already registered: {email}",
        /// No account exists for the given identifier.
        NotFound { user_id: i32 } =>
            "no user with id {user_id}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create an account with default notification preferences and a fresh
    /// verification token, all in one transaction.
    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError>;

    /// Look up an account by email for credential verification.
    async fn find_by_email(&self, email: &str)
        -> Result<Option<AuthRecord>, UserRepositoryError>;

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserRepositoryError>;

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError>;

    /// Delete an account and everything it owns: library entries, schedules,
    /// notifications, preferences, and verification tokens.
    async fn delete(&self, user_id: UserId) -> Result<(), UserRepositoryError>;

    /// Users with stored coordinates and weather alerts enabled, for the
    /// background weather sweep.
    async fn list_alert_recipients(&self) -> Result<Vec<AlertRecipient>, UserRepositoryError>;

    /// Fetch notification preferences; `None` when the account is missing.
    async fn preferences(
        &self,
        user_id: UserId,
    ) -> Result<Option<NotificationPreferences>, UserRepositoryError>;

    async fn update_preferences(
        &self,
        user_id: UserId,
        preferences: NotificationPreferences,
    ) -> Result<(), UserRepositoryError>;
}

/// Fixture implementation backed by nothing. Lookups miss, mutations succeed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

#[async_trait]
impl UserRepository for FixtureUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, UserRepositoryError> {
        Ok(User {
            id: UserId::new(1),
            name: new_user.name,
            email: new_user.email,
            phone: new_user.phone,
            location: new_user.location,
        })
    }

    async fn find_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<AuthRecord>, UserRepositoryError> {
        Ok(None)
    }

    async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _user_id: UserId) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    async fn list_alert_recipients(&self) -> Result<Vec<AlertRecipient>, UserRepositoryError> {
        Ok(Vec::new())
    }

    async fn preferences(
        &self,
        _user_id: UserId,
    ) -> Result<Option<NotificationPreferences>, UserRepositoryError> {
        Ok(Some(NotificationPreferences::default()))
    }

    async fn update_preferences(
        &self,
        _user_id: UserId,
        _preferences: NotificationPreferences,
    ) -> Result<(), UserRepositoryError> {
        Ok(())
    }
}
