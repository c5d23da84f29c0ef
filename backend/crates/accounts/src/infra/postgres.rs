//! PostgreSQL Account Store

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::user::{NewAccount, User};
use crate::domain::repository::AccountStore;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AccountError, AccountResult};

/// Unique constraint on users.email
const EMAIL_CONSTRAINT: &str = "users_email_key";
/// Unique index on LOWER(users.username)
const USERNAME_CONSTRAINT: &str = "users_username_lower_key";

/// PostgreSQL-backed account store
#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl AccountStore for PgAccountStore {
    async fn create(&self, new_account: NewAccount) -> AccountResult<User> {
        let user = User::new(new_account.username, new_account.email);

        // Uniqueness is enforced by the database constraints; a violation
        // surfaces as error code 23505 with the constraint name
        let result = sqlx::query(
            r#"
            INSERT INTO users (
                id,
                username,
                email,
                password_hash,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.username.original())
        .bind(user.email.as_str())
        .bind(&new_account.password)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
                match db_err.constraint() {
                    Some(EMAIL_CONSTRAINT) => Err(AccountError::EmailTaken),
                    Some(USERNAME_CONSTRAINT) => Err(AccountError::UsernameTaken),
                    _ => Err(AccountError::Database(sqlx::Error::Database(db_err))),
                }
            }
            Err(e) => Err(AccountError::Database(e)),
        }
    }

    async fn find_by_email(&self, email: &str) -> AccountResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                id,
                username,
                email,
                created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_user()))
    }

    async fn verify_password(&self, email: &str, password: &str) -> AccountResult<bool> {
        let hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(matches!(hash, Some(h) if h == password))
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: UserId::from_uuid(self.id),
            username: Username::new(self.username),
            email: Email::from_db(&self.email),
            created_at: self.created_at,
        }
    }
}
