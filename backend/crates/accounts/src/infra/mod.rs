//! Infrastructure Layer
//!
//! Store implementations backed by PostgreSQL or process memory.

pub mod memory;
pub mod postgres;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;
