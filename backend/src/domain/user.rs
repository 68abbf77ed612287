//! User account data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable user identifier backed by the store's integer primary key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i32)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw store identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw store identifier.
    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Resolved location attached to an account at signup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// User profile as exposed to clients. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: Location,
}

/// Account creation payload handed to the user repository.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub location: Location,
}

/// User row paired with its stored password hash, for credential checks.
#[derive(Debug, Clone)]
pub struct AuthRecord {
    pub user: User,
    pub password_hash: String,
}

/// Weather sweep target: a user with coordinates and alerts enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlertRecipient {
    pub user_id: UserId,
    pub latitude: f64,
    pub longitude: f64,
}
