//! Arcade Backend Module
//!
//! Leaderboard and active-player features for the snake game.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, store traits
//! - `infra/` - Store implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Features
//! - Score submission (bearer-authenticated) and top-ten ranking,
//!   optionally filtered by game mode
//! - Read-only registry of players currently in a game, with full
//!   board state (snake segments, food, direction)
//!
//! There is no application layer here: every endpoint maps to exactly
//! one store operation, so handlers call the stores directly.

pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::active_player::ActivePlayer;
pub use domain::entity::leaderboard_entry::LeaderboardEntry;
pub use domain::repository::{ActivePlayerRegistry, LeaderboardStore};
pub use domain::value_object::direction::Direction;
pub use domain::value_object::game_mode::GameMode;
pub use domain::value_object::position::Position;
pub use error::{ArcadeError, ArcadeResult};
pub use infra::memory::{MemoryActivePlayerRegistry, MemoryLeaderboardStore};
pub use infra::postgres::PgLeaderboardStore;
pub use presentation::router::{
    leaderboard_router, leaderboard_router_generic, players_router, players_router_generic,
};
