//! In-Memory Account Store
//!
//! Keeps accounts in a process-local table behind an async `RwLock`.
//! Used when no `DATABASE_URL` is configured, and by tests.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{NewAccount, User};
use crate::domain::repository::AccountStore;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AccountError, AccountResult};

/// Demo accounts seeded by [`MemoryAccountStore::with_demo_accounts`].
///
/// Tuples of (email, username, password).
const DEMO_ACCOUNTS: [(&str, &str, &str); 6] = [
    ("demo@snake.game", "DemoPlayer", "demo123"),
    ("viper@snake.game", "ViperStrike", "pass123"),
    ("python@snake.game", "Pythonista", "snake_case"),
    ("cobra@snake.game", "KingCobra", "hisshiss"),
    ("anaconda@snake.game", "BigSqueeze", "constrict"),
    ("mamba@snake.game", "BlackMamba", "fastbite"),
];

/// Accounts and their credentials, both keyed by email
#[derive(Default)]
struct AccountTable {
    users: HashMap<String, User>,
    passwords: HashMap<String, String>,
}

/// In-memory account store
///
/// Cloning shares the underlying table, so every clone observes the
/// same accounts.
#[derive(Clone, Default)]
pub struct MemoryAccountStore {
    inner: Arc<RwLock<AccountTable>>,
}

impl MemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the demo accounts
    pub fn with_demo_accounts() -> Self {
        let mut table = AccountTable::default();
        for (email, username, password) in DEMO_ACCOUNTS {
            let user = User::new(Username::new(username), Email::from_db(email));
            table.passwords.insert(email.to_string(), password.to_string());
            table.users.insert(email.to_string(), user);
        }
        Self {
            inner: Arc::new(RwLock::new(table)),
        }
    }
}

impl AccountStore for MemoryAccountStore {
    async fn create(&self, new_account: NewAccount) -> AccountResult<User> {
        // One write lock covers both uniqueness checks and the insert,
        // so concurrent signups cannot race past each other
        let mut table = self.inner.write().await;

        if table.users.contains_key(new_account.email.as_str()) {
            return Err(AccountError::EmailTaken);
        }
        if table
            .users
            .values()
            .any(|u| u.username.canonical() == new_account.username.canonical())
        {
            return Err(AccountError::UsernameTaken);
        }

        let user = User::new(new_account.username, new_account.email);
        let email = user.email.as_str().to_string();
        table.passwords.insert(email.clone(), new_account.password);
        table.users.insert(email, user.clone());

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<User>> {
        let table = self.inner.read().await;
        Ok(table.users.get(email).cloned())
    }

    async fn verify_password(&self, email: &str, password: &str) -> AccountResult<bool> {
        let table = self.inner.read().await;
        Ok(matches!(table.passwords.get(email), Some(p) if p == password))
    }
}
