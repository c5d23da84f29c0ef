//! Infrastructure Layer
//!
//! Store implementations backed by PostgreSQL or process memory. The
//! active-player registry is memory-only; live board state has no
//! durability requirement.

pub mod memory;
pub mod postgres;

pub use memory::{MemoryActivePlayerRegistry, MemoryLeaderboardStore};
pub use postgres::PgLeaderboardStore;
