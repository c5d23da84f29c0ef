//! Presentation Layer
//!
//! HTTP handlers, DTOs, and routers.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::{LeaderboardAppState, PlayersAppState};
pub use router::{
    leaderboard_router, leaderboard_router_generic, players_router, players_router_generic,
};
