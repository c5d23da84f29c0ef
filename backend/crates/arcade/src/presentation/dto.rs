//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::active_player::ActivePlayer;
use crate::domain::entity::leaderboard_entry::LeaderboardEntry;
use crate::domain::value_object::{
    direction::Direction, game_mode::GameMode, position::Position,
};

// ============================================================================
// Requests
// ============================================================================

/// Score submission request
///
/// The submitter's name comes from the bearer identity, never from the
/// request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    pub score: i32,
    pub mode: GameMode,
}

/// Leaderboard query string
///
/// An unknown mode value rejects the request; it does not fall back to
/// the unfiltered ranking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    pub mode: Option<GameMode>,
}

// ============================================================================
// Responses
// ============================================================================

/// Leaderboard entry projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub id: String,
    pub username: String,
    pub score: i32,
    pub mode: GameMode,
    /// Submission day, serialized as YYYY-MM-DD
    pub date: NaiveDate,
}

impl From<LeaderboardEntry> for LeaderboardEntryDto {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            username: entry.username,
            score: entry.score,
            mode: entry.mode,
            date: entry.date,
        }
    }
}

/// Active player projection with live board state
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlayerDto {
    pub id: String,
    pub username: String,
    pub score: i32,
    pub mode: GameMode,
    pub snake: Vec<Position>,
    pub food: Position,
    pub direction: Direction,
    pub started_at: DateTime<Utc>,
}

impl From<ActivePlayer> for ActivePlayerDto {
    fn from(player: ActivePlayer) -> Self {
        Self {
            id: player.id,
            username: player.username,
            score: player.score,
            mode: player.mode,
            snake: player.snake,
            food: player.food,
            direction: player.direction,
            started_at: player.started_at,
        }
    }
}
