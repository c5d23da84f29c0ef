//! Store Trait
//!
//! Interface for account persistence. Implementations live in the
//! infrastructure layer (PostgreSQL and in-memory), behave identically,
//! and are safe under concurrent invocation.

use crate::domain::entity::user::{NewAccount, User};
use crate::error::AccountResult;

/// Account store trait
///
/// The uniqueness check inside `create` is atomic with the insert: two
/// concurrent calls can never both succeed for the same email or for
/// case-insensitively equal usernames.
#[trait_variant::make(AccountStore: Send)]
pub trait LocalAccountStore {
    /// Create a new account; fails with a conflict error if the email
    /// exists or any existing username matches case-insensitively
    async fn create(&self, new_account: NewAccount) -> AccountResult<User>;

    /// Find a user by email (exact match)
    async fn find_by_email(&self, email: &str) -> AccountResult<Option<User>>;

    /// Check a raw credential; true iff an account exists for `email`
    /// and its stored credential equals `password` byte-for-byte
    async fn verify_password(&self, email: &str, password: &str) -> AccountResult<bool>;
}
