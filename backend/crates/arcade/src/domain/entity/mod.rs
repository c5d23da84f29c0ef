//! Entity Module

pub mod active_player;
pub mod leaderboard_entry;
