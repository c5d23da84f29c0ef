//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use std::sync::Arc;

use accounts::{AccountStore, resolve_bearer};
use kernel::response::ApiResponse;

use crate::domain::repository::{ActivePlayerRegistry, LeaderboardStore};
use crate::error::ArcadeResult;
use crate::presentation::dto::{
    ActivePlayerDto, LeaderboardEntryDto, LeaderboardQuery, ScoreSubmission,
};

/// Shared state for leaderboard handlers
///
/// Carries the account store alongside the leaderboard so submissions
/// can resolve the bearer identity.
#[derive(Clone)]
pub struct LeaderboardAppState<L, S>
where
    L: LeaderboardStore + Clone + Send + Sync + 'static,
    S: AccountStore + Clone + Send + Sync + 'static,
{
    pub leaderboard: Arc<L>,
    pub accounts: Arc<S>,
}

/// Shared state for active player handlers
#[derive(Clone)]
pub struct PlayersAppState<P>
where
    P: ActivePlayerRegistry + Clone + Send + Sync + 'static,
{
    pub registry: Arc<P>,
}

// ============================================================================
// Leaderboard
// ============================================================================

/// GET /leaderboard
pub async fn get_leaderboard<L, S>(
    State(state): State<LeaderboardAppState<L, S>>,
    Query(query): Query<LeaderboardQuery>,
) -> ArcadeResult<impl IntoResponse>
where
    L: LeaderboardStore + Clone + Send + Sync + 'static,
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let entries = state.leaderboard.top_scores(query.mode).await?;

    let dtos: Vec<LeaderboardEntryDto> = entries.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::ok(dtos)))
}

/// POST /leaderboard
///
/// The score is recorded under the authenticated user's name; an
/// unauthenticated submission never reaches the store.
pub async fn submit_score<L, S>(
    State(state): State<LeaderboardAppState<L, S>>,
    headers: HeaderMap,
    Json(req): Json<ScoreSubmission>,
) -> ArcadeResult<impl IntoResponse>
where
    L: LeaderboardStore + Clone + Send + Sync + 'static,
    S: AccountStore + Clone + Send + Sync + 'static,
{
    let user = resolve_bearer(state.accounts.as_ref(), &headers).await?;

    let entry = state
        .leaderboard
        .add_score(user.username.original(), req.score, req.mode)
        .await?;

    tracing::info!(
        username = %entry.username,
        score = entry.score,
        mode = %entry.mode,
        "Score submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(LeaderboardEntryDto::from(entry))),
    ))
}

// ============================================================================
// Active Players
// ============================================================================

/// GET /players
pub async fn list_players<P>(
    State(state): State<PlayersAppState<P>>,
) -> ArcadeResult<impl IntoResponse>
where
    P: ActivePlayerRegistry + Clone + Send + Sync + 'static,
{
    let players = state.registry.list_players().await?;

    let dtos: Vec<ActivePlayerDto> = players.into_iter().map(Into::into).collect();

    Ok(Json(ApiResponse::ok(dtos)))
}

/// GET /players/{id}
///
/// An unknown id is an in-band miss with a 200, matching how clients
/// poll players that may have just finished their game.
pub async fn get_player<P>(
    State(state): State<PlayersAppState<P>>,
    Path(id): Path<String>,
) -> ArcadeResult<impl IntoResponse>
where
    P: ActivePlayerRegistry + Clone + Send + Sync + 'static,
{
    let response = match state.registry.find_by_id(&id).await? {
        Some(player) => ApiResponse::ok(ActivePlayerDto::from(player)),
        None => ApiResponse::error("Player not found"),
    };

    Ok(Json(response))
}
