//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::domain::entity::user::{NewAccount, User};
use crate::domain::repository::AccountStore;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AccountError, AccountResult};

/// Sign up input
pub struct SignUpInput {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<S>
where
    S: AccountStore,
{
    store: Arc<S>,
}

impl<S> SignUpUseCase<S>
where
    S: AccountStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, input: SignUpInput) -> AccountResult<User> {
        // Validate email
        let email = Email::new(input.email)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;

        // Usernames are stored verbatim; uniqueness is checked by the store
        let username = Username::new(input.username);

        // Persist; the store enforces email and username uniqueness atomically
        let user = self
            .store
            .create(NewAccount {
                email,
                username,
                password: input.password,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User signed up"
        );

        Ok(user)
    }
}
