//! In-Memory Stores
//!
//! Leaderboard and active-player implementations behind async
//! `RwLock`s. Used when no `DATABASE_URL` is configured, and by tests.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use kernel::id::EntryId;
use tokio::sync::RwLock;

use crate::domain::entity::active_player::ActivePlayer;
use crate::domain::entity::leaderboard_entry::LeaderboardEntry;
use crate::domain::repository::{ActivePlayerRegistry, LeaderboardStore};
use crate::domain::value_object::{
    direction::Direction, game_mode::GameMode, position::Position,
};
use crate::error::ArcadeResult;

// ============================================================================
// Leaderboard
// ============================================================================

/// Demo scores seeded by [`MemoryLeaderboardStore::with_demo_scores`].
///
/// Tuples of (username, score, mode, day-of-January-2024).
const DEMO_SCORES: [(&str, i32, GameMode, u32); 20] = [
    ("NeonMaster", 1100, GameMode::Walls, 15),
    ("PixelKing", 1050, GameMode::Passthrough, 14),
    ("ArcadeQueen", 1070, GameMode::Walls, 13),
    ("RetroGamer", 920, GameMode::Passthrough, 12),
    ("SnakeCharmer", 930, GameMode::Walls, 11),
    ("BitRunner", 850, GameMode::Passthrough, 10),
    ("VectorViper", 400, GameMode::Walls, 9),
    ("GlitchGuru", 300, GameMode::Passthrough, 8),
    ("CyberSnake", 100, GameMode::Walls, 7),
    ("NeonByte", 200, GameMode::Passthrough, 6),
    ("ViperStrike", 550, GameMode::Walls, 16),
    ("Pythonista", 600, GameMode::Passthrough, 16),
    ("KingCobra", 720, GameMode::Walls, 15),
    ("BigSqueeze", 680, GameMode::Passthrough, 15),
    ("BlackMamba", 920, GameMode::Walls, 14),
    ("DemoPlayer", 160, GameMode::Passthrough, 14),
    ("ViperStrike", 180, GameMode::Passthrough, 13),
    ("Pythonista", 320, GameMode::Walls, 13),
    ("KingCobra", 460, GameMode::Passthrough, 12),
    ("BigSqueeze", 320, GameMode::Walls, 12),
];

/// How many entries a ranking returns
const TOP_LIMIT: usize = 10;

/// In-memory leaderboard store
///
/// Entries are kept in submission order; ranking sorts a snapshot with
/// a stable sort so equal scores keep that order.
#[derive(Clone, Default)]
pub struct MemoryLeaderboardStore {
    entries: Arc<RwLock<Vec<LeaderboardEntry>>>,
}

impl MemoryLeaderboardStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the demo scores
    pub fn with_demo_scores() -> Self {
        let entries = DEMO_SCORES
            .into_iter()
            .map(|(username, score, mode, day)| LeaderboardEntry {
                id: EntryId::new(),
                username: username.to_string(),
                score,
                mode,
                date: demo_date(day),
            })
            .collect();

        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

/// January 2024 demo date; falls back to the epoch for an invalid day
fn demo_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default()
}

impl LeaderboardStore for MemoryLeaderboardStore {
    async fn add_score(
        &self,
        username: &str,
        score: i32,
        mode: GameMode,
    ) -> ArcadeResult<LeaderboardEntry> {
        let entry = LeaderboardEntry::new(username, score, mode);

        let mut entries = self.entries.write().await;
        entries.push(entry.clone());

        Ok(entry)
    }

    async fn top_scores(&self, mode: Option<GameMode>) -> ArcadeResult<Vec<LeaderboardEntry>> {
        let entries = self.entries.read().await;

        let mut ranked: Vec<LeaderboardEntry> = entries
            .iter()
            .filter(|e| mode.is_none_or(|m| e.mode == m))
            .cloned()
            .collect();

        // Stable sort keeps submission order among equal scores
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(TOP_LIMIT);

        Ok(ranked)
    }
}

// ============================================================================
// Active Players
// ============================================================================

/// In-memory active player registry
///
/// The registry starts empty and seeds its demo players on the first
/// listing, so a freshly started process costs nothing until the
/// spectator view is actually opened.
#[derive(Clone, Default)]
pub struct MemoryActivePlayerRegistry {
    players: Arc<RwLock<Vec<ActivePlayer>>>,
}

impl MemoryActivePlayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }
}

impl ActivePlayerRegistry for MemoryActivePlayerRegistry {
    async fn list_players(&self) -> ArcadeResult<Vec<ActivePlayer>> {
        {
            let players = self.players.read().await;
            if !players.is_empty() {
                return Ok(players.clone());
            }
        }

        // Double-checked under the write lock so concurrent first
        // listings seed exactly once
        let mut players = self.players.write().await;
        if players.is_empty() {
            *players = seed_players();
            tracing::info!(count = players.len(), "Seeded demo active players");
        }

        Ok(players.clone())
    }

    async fn find_by_id(&self, id: &str) -> ArcadeResult<Option<ActivePlayer>> {
        // A lookup never seeds; an id that was never listed is a miss
        let players = self.players.read().await;
        Ok(players.iter().find(|p| p.id == id).cloned())
    }
}

/// Demo players shown before any real game publishes into the registry
fn seed_players() -> Vec<ActivePlayer> {
    let now = Utc::now();

    vec![
        ActivePlayer {
            id: "active-1".to_string(),
            username: "LivePlayer1".to_string(),
            score: 150,
            mode: GameMode::Walls,
            snake: vec![Position::new(10, 10), Position::new(9, 10)],
            food: Position::new(15, 12),
            direction: Direction::Right,
            started_at: now,
        },
        ActivePlayer {
            id: "active-2".to_string(),
            username: "ProGamer99".to_string(),
            score: 320,
            mode: GameMode::Passthrough,
            snake: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(5, 7),
            ],
            food: Position::new(8, 8),
            direction: Direction::Up,
            started_at: now,
        },
        ActivePlayer {
            id: "active-3".to_string(),
            username: "SnakeMaster".to_string(),
            score: 80,
            mode: GameMode::Walls,
            snake: vec![Position::new(15, 15), Position::new(16, 15)],
            food: Position::new(12, 12),
            direction: Direction::Left,
            started_at: now,
        },
    ]
}
