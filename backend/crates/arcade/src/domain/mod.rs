//! Domain Layer
//!
//! Entities, value objects, and store traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::active_player::ActivePlayer;
pub use entity::leaderboard_entry::LeaderboardEntry;
pub use repository::{ActivePlayerRegistry, LeaderboardStore};
