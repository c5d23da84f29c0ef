//! Leaderboard Entry Entity

use chrono::{NaiveDate, Utc};
use kernel::id::EntryId;

use crate::domain::value_object::game_mode::GameMode;

/// A single submitted score
///
/// The username is denormalized at submission time; renames after the
/// fact do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Internal UUID identifier
    pub id: EntryId,
    /// Display name of the submitter at submission time
    pub username: String,
    /// Final score of the run
    pub score: i32,
    /// Mode the run was played in
    pub mode: GameMode,
    /// Calendar day of the submission
    pub date: NaiveDate,
}

impl LeaderboardEntry {
    /// Create a new entry with a fresh id, dated today
    pub fn new(username: impl Into<String>, score: i32, mode: GameMode) -> Self {
        Self {
            id: EntryId::new(),
            username: username.into(),
            score,
            mode,
            date: Utc::now().date_naive(),
        }
    }
}
