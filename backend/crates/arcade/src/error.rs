//! Arcade Error Types
//!
//! Error variants for the leaderboard and active-player features,
//! integrating with the unified `kernel::error::AppError` system.

use accounts::AccountError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Arcade-specific result type alias
pub type ArcadeResult<T> = Result<T, ArcadeError>;

/// Arcade-specific error variants
#[derive(Debug, Error)]
pub enum ArcadeError {
    /// Identity resolution failed on a protected route
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored data that should be impossible (e.g. an unknown mode)
    #[error("{0}")]
    Internal(String),
}

impl ArcadeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ArcadeError::Account(e) => e.status_code(),
            ArcadeError::Database(_) | ArcadeError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArcadeError::Account(e) => e.kind(),
            ArcadeError::Database(_) | ArcadeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            ArcadeError::Database(e) => {
                tracing::error!(error = %e, "Arcade database error");
            }
            ArcadeError::Internal(message) => {
                tracing::error!(error = %message, "Arcade internal error");
            }
            // Account errors log themselves on conversion below
            ArcadeError::Account(_) => {}
        }
    }
}

impl IntoResponse for ArcadeError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            ArcadeError::Account(e) => e.into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}
