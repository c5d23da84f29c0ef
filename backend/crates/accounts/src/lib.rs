//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, store traits
//! - `application/` - Use cases
//! - `infra/` - Store implementations (PostgreSQL, in-memory)
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - User signup with email + username + password
//! - Login returning the public user projection
//! - Bearer-token identity resolution for protected routes
//!
//! ## Security Model
//! - The bearer token value IS the account email, verbatim. This mirrors
//!   the legacy wire contract and is a stand-in for real authentication;
//!   `presentation::identity::resolve_bearer` is the single seam where a
//!   signed token would replace it.
//! - Credentials are stored and compared as plain strings for the same
//!   reason. Do not reuse this crate outside that compatibility boundary.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use domain::entity::user::{NewAccount, User};
pub use domain::repository::AccountStore;
pub use error::{AccountError, AccountResult};
pub use infra::memory::MemoryAccountStore;
pub use infra::postgres::PgAccountStore;
pub use presentation::identity::resolve_bearer;
pub use presentation::router::{accounts_router, accounts_router_generic};

#[cfg(test)]
mod tests;
