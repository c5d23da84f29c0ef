//! Domain Layer
//!
//! Contains entities, value objects, and the account store trait.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::user::{NewAccount, User};
pub use repository::AccountStore;
