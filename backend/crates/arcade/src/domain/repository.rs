//! Store Traits
//!
//! Interfaces for leaderboard persistence and the active-player
//! registry. Implementations live in the infrastructure layer.

use crate::domain::entity::active_player::ActivePlayer;
use crate::domain::entity::leaderboard_entry::LeaderboardEntry;
use crate::domain::value_object::game_mode::GameMode;
use crate::error::ArcadeResult;

/// Leaderboard store trait
#[trait_variant::make(LeaderboardStore: Send)]
pub trait LocalLeaderboardStore {
    /// Record a score and return the stored entry
    async fn add_score(
        &self,
        username: &str,
        score: i32,
        mode: GameMode,
    ) -> ArcadeResult<LeaderboardEntry>;

    /// Top ten entries by score, optionally restricted to one mode
    ///
    /// Ordered by score descending; entries with equal scores keep
    /// their submission order.
    async fn top_scores(&self, mode: Option<GameMode>) -> ArcadeResult<Vec<LeaderboardEntry>>;
}

/// Active player registry trait
///
/// Read-only from the API's point of view; game sessions are owned by
/// whatever publishes into the registry.
#[trait_variant::make(ActivePlayerRegistry: Send)]
pub trait LocalActivePlayerRegistry {
    /// Snapshot of everyone currently in a game
    async fn list_players(&self) -> ArcadeResult<Vec<ActivePlayer>>;

    /// Look up one player by registry id
    async fn find_by_id(&self, id: &str) -> ArcadeResult<Option<ActivePlayer>>;
}
