//! Active Player Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    direction::Direction, game_mode::GameMode, position::Position,
};

/// A player currently in a game, with their live board state
///
/// The id is an opaque registry key, not a user id; spectator clients
/// pass it back verbatim to poll one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePlayer {
    /// Opaque registry identifier
    pub id: String,
    /// Display name
    pub username: String,
    /// Current score of the ongoing run
    pub score: i32,
    /// Mode being played
    pub mode: GameMode,
    /// Snake segments, head first
    pub snake: Vec<Position>,
    /// Current food cell
    pub food: Position,
    /// Current travel direction
    pub direction: Direction,
    /// When the run started
    pub started_at: DateTime<Utc>,
}
