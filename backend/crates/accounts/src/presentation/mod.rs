//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and bearer-token identity resolution.

pub mod dto;
pub mod handlers;
pub mod identity;
pub mod router;

pub use handlers::AccountAppState;
pub use identity::resolve_bearer;
pub use router::{accounts_router, accounts_router_generic};
