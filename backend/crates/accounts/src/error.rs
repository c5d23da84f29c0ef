//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
///
/// Conflicts and wrong credentials are classified with their real HTTP
/// kinds here; the handlers decide where the wire contract demands an
/// in-band envelope instead of an error status.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Email already registered
    #[error("Email is already registered")]
    EmailTaken,

    /// Username already taken (case-insensitive)
    #[error("Username is already taken")]
    UsernameTaken,

    /// Wrong email or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token on a protected route
    #[error("Not authenticated")]
    TokenMissing,

    /// Bearer token resolves to no account
    #[error("Invalid authentication credentials")]
    TokenInvalid,

    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::EmailTaken | AccountError::UsernameTaken => StatusCode::CONFLICT,
            AccountError::InvalidCredentials
            | AccountError::TokenMissing
            | AccountError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AccountError::Validation(_) => StatusCode::BAD_REQUEST,
            AccountError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::EmailTaken | AccountError::UsernameTaken => ErrorKind::Conflict,
            AccountError::InvalidCredentials
            | AccountError::TokenMissing
            | AccountError::TokenInvalid => ErrorKind::Unauthorized,
            AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::TokenInvalid => {
                tracing::warn!("Bearer token resolved to no account");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
