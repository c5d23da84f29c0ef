//! Arcade Routers

use axum::{Router, routing::get};
use std::sync::Arc;

use accounts::{AccountStore, PgAccountStore};

use crate::domain::repository::{ActivePlayerRegistry, LeaderboardStore};
use crate::infra::memory::MemoryActivePlayerRegistry;
use crate::infra::postgres::PgLeaderboardStore;
use crate::presentation::handlers::{self, LeaderboardAppState, PlayersAppState};

/// Create the leaderboard router with the PostgreSQL stores
pub fn leaderboard_router(leaderboard: PgLeaderboardStore, accounts: PgAccountStore) -> Router {
    let state = LeaderboardAppState {
        leaderboard: Arc::new(leaderboard),
        accounts: Arc::new(accounts),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_leaderboard::<PgLeaderboardStore, PgAccountStore>)
                .post(handlers::submit_score::<PgLeaderboardStore, PgAccountStore>),
        )
        .with_state(state)
}

/// Create a generic leaderboard router for any store implementations
pub fn leaderboard_router_generic<L, S>(leaderboard: L, accounts: S) -> Router
where
    L: LeaderboardStore + Clone + Send + Sync + 'static,
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let state = LeaderboardAppState {
        leaderboard: Arc::new(leaderboard),
        accounts: Arc::new(accounts),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_leaderboard::<L, S>).post(handlers::submit_score::<L, S>),
        )
        .with_state(state)
}

/// Create the players router with the in-memory registry
pub fn players_router(registry: MemoryActivePlayerRegistry) -> Router {
    let state = PlayersAppState {
        registry: Arc::new(registry),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_players::<MemoryActivePlayerRegistry>),
        )
        .route(
            "/{id}",
            get(handlers::get_player::<MemoryActivePlayerRegistry>),
        )
        .with_state(state)
}

/// Create a generic players router for any registry implementation
pub fn players_router_generic<P>(registry: P) -> Router
where
    P: ActivePlayerRegistry + Clone + Send + Sync + 'static,
{
    let state = PlayersAppState {
        registry: Arc::new(registry),
    };

    Router::new()
        .route("/", get(handlers::list_players::<P>))
        .route("/{id}", get(handlers::get_player::<P>))
        .with_state(state)
}
