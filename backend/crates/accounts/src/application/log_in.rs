//! Log In Use Case
//!
//! Authenticates a user by email and password.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::AccountStore;
use crate::error::{AccountError, AccountResult};

/// Log in input
pub struct LogInInput {
    pub email: String,
    pub password: String,
}

/// Log in use case
pub struct LogInUseCase<S>
where
    S: AccountStore,
{
    store: Arc<S>,
}

impl<S> LogInUseCase<S>
where
    S: AccountStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: LogInInput) -> AccountResult<User> {
        // Check credentials; unknown email and wrong password are
        // indistinguishable to the caller
        if !self
            .store
            .verify_password(&input.email, &input.password)
            .await?
        {
            return Err(AccountError::InvalidCredentials);
        }

        let user = self
            .store
            .find_by_email(&input.email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        tracing::info!(username = %user.username, "User logged in");

        Ok(user)
    }
}
