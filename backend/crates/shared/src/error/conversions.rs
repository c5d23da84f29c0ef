//! Error conversions - HTTP boundary integration for [`AppError`]
//!
//! Renders [`AppError`] as the uniform response envelope (feature-gated).

#[cfg(feature = "axum")]
use super::app_error::AppError;

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use http::{HeaderValue, StatusCode, header};

        use crate::response::ApiResponse;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ApiResponse::<()>::error(self.message().to_string());

        let mut response = (status, Json(body)).into_response();

        // Bearer challenge on authentication failures (RFC 6750)
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }

        response
    }
}
