//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use kernel::response::ApiResponse;

use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::AccountStore;
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{AuthResponse, LoginRequest, SignupRequest, UserDto};
use crate::presentation::identity::resolve_bearer;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<S>
where
    S: AccountStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/signup
///
/// A duplicate account is not an error status on the wire: the response
/// is still 201 with an in-band `{"success": false}` envelope.
pub async fn sign_up<S>(
    State(state): State<AccountAppState<S>>,
    Json(req): Json<SignupRequest>,
) -> AccountResult<impl IntoResponse>
where
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.store.clone());

    let input = SignUpInput {
        email: req.email,
        username: req.username,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(AuthResponse::user(UserDto::from(user))),
        )
            .into_response()),
        Err(AccountError::EmailTaken | AccountError::UsernameTaken) => Ok((
            StatusCode::CREATED,
            Json(AuthResponse::error("User already exists")),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Log In
// ============================================================================

/// POST /auth/login
///
/// Wrong credentials are reported in-band with a 200, not a 401.
pub async fn log_in<S>(
    State(state): State<AccountAppState<S>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<impl IntoResponse>
where
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.store.clone());

    let input = LogInInput {
        email: req.email,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(user) => Ok(Json(AuthResponse::user(UserDto::from(user))).into_response()),
        Err(AccountError::InvalidCredentials) => {
            Ok(Json(AuthResponse::error("Invalid credentials")).into_response())
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Log Out
// ============================================================================

/// POST /auth/logout
///
/// Tokens are not stored server-side, so there is nothing to revoke;
/// the endpoint still demands a valid token before acknowledging.
pub async fn log_out<S>(
    State(state): State<AccountAppState<S>>,
    headers: HeaderMap,
) -> AccountResult<impl IntoResponse>
where
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let user = resolve_bearer(state.store.as_ref(), &headers).await?;

    tracing::info!(username = %user.username, "User logged out");

    Ok(Json(ApiResponse::<()>::success()))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /auth/me
pub async fn me<S>(
    State(state): State<AccountAppState<S>>,
    headers: HeaderMap,
) -> AccountResult<impl IntoResponse>
where
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let user = resolve_bearer(state.store.as_ref(), &headers).await?;

    Ok(Json(ApiResponse::ok(UserDto::from(user))))
}
