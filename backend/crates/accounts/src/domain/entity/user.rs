//! User Entity
//!
//! Public user projection. The password credential never appears here;
//! it is held by the store and only reachable through `verify_password`.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, username::Username};

/// User entity
///
/// Everything in this struct is safe to echo back to clients.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub id: UserId,
    /// User name (display form preserved, uniqueness is case-insensitive)
    pub username: Username,
    /// Email address (natural key, exact-match lookups)
    pub email: Email,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id and "now" as creation time
    pub fn new(username: Username, email: Email) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            created_at: Utc::now(),
        }
    }
}

/// Account creation input
///
/// Carries the raw credential to the store; the store owns how (and
/// where) it is persisted.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub username: Username,
    pub password: String,
}
