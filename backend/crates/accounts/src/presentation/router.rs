//! Accounts Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::domain::repository::AccountStore;
use crate::infra::postgres::PgAccountStore;
use crate::presentation::handlers::{self, AccountAppState};

/// Create the accounts router with the PostgreSQL store
pub fn accounts_router(store: PgAccountStore) -> Router {
    let state = AccountAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<PgAccountStore>))
        .route("/login", post(handlers::log_in::<PgAccountStore>))
        .route("/logout", post(handlers::log_out::<PgAccountStore>))
        .route("/me", get(handlers::me::<PgAccountStore>))
        .with_state(state)
}

/// Create a generic accounts router for any store implementation
pub fn accounts_router_generic<S>(store: S) -> Router
where
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let state = AccountAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<S>))
        .route("/login", post(handlers::log_in::<S>))
        .route("/logout", post(handlers::log_out::<S>))
        .route("/me", get(handlers::me::<S>))
        .with_state(state)
}
