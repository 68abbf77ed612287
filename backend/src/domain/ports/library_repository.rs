//! Port for per-user crop libraries.

use async_trait::async_trait;

use crate::domain::crop::Crop;
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by library repository adapters.
    pub enum LibraryRepositoryError {
        Connection { message: String } =>
            "library repository connection failed: {message}",
        Query { message: String } =>
            "library repository query failed: {message}",
        /// The referenced account does not exist.
        UserMissing { user_id: i32 } =>
            "no user with id {user_id}",
        /// The named crop is not in the catalog.
        CropMissing { name: String } =>
            "no crop named {name}",
    }
}

/// Result of adding a crop to a library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryAddOutcome {
    Added,
    /// The pair already existed; the call is a no-op.
    AlreadyPresent,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LibraryRepository: Send + Sync {
    /// Add a catalog crop to the user's library. Idempotent.
    async fn add(
        &self,
        user_id: UserId,
        crop_name: &str,
    ) -> Result<LibraryAddOutcome, LibraryRepositoryError>;

    /// Remove a crop from the library. Returns `false` when it was absent.
    async fn remove(
        &self,
        user_id: UserId,
        crop_name: &str,
    ) -> Result<bool, LibraryRepositoryError>;

    async fn list(&self, user_id: UserId) -> Result<Vec<Crop>, LibraryRepositoryError>;
}
