//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Requests
// ============================================================================

/// Signup request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Public user projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.original().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Auth envelope returned by signup and login
///
/// Domain outcomes (duplicate account, wrong credentials) ride in-band
/// as `success: false` with a message instead of an error status.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthResponse {
    /// Successful outcome carrying the user
    pub fn user(user: UserDto) -> Self {
        Self {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    /// Failed outcome carrying a message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(message.into()),
        }
    }
}
