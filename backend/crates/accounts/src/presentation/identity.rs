//! Bearer Token Identity Resolution
//!
//! The bearer token is the account's email address. Resolving a request
//! identity is therefore a store lookup; there is no session table and
//! nothing to expire. `resolve_bearer` is the seam to replace when the
//! token scheme changes.

use axum::http::{HeaderMap, header};

use crate::domain::entity::user::User;
use crate::domain::repository::AccountStore;
use crate::error::{AccountError, AccountResult};

/// Resolve the request identity from the `Authorization` header
///
/// Returns [`AccountError::TokenMissing`] when the header is absent or
/// not a bearer scheme, and [`AccountError::TokenInvalid`] when the
/// token matches no account.
pub async fn resolve_bearer<S>(store: &S, headers: &HeaderMap) -> AccountResult<User>
where
    S: AccountStore,
{
    let token = bearer_token(headers).ok_or(AccountError::TokenMissing)?;

    store
        .find_by_email(token)
        .await?
        .ok_or(AccountError::TokenInvalid)
}

/// Extract the bearer token from request headers
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
