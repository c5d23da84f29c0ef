//! PostgreSQL Leaderboard Store

use chrono::NaiveDate;
use kernel::id::EntryId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::leaderboard_entry::LeaderboardEntry;
use crate::domain::repository::LeaderboardStore;
use crate::domain::value_object::game_mode::GameMode;
use crate::error::{ArcadeError, ArcadeResult};

/// PostgreSQL-backed leaderboard store
///
/// Tie order among equal scores rides on the `seq` column, assigned by
/// the database in insert order.
#[derive(Clone)]
pub struct PgLeaderboardStore {
    pool: PgPool,
}

impl PgLeaderboardStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl LeaderboardStore for PgLeaderboardStore {
    async fn add_score(
        &self,
        username: &str,
        score: i32,
        mode: GameMode,
    ) -> ArcadeResult<LeaderboardEntry> {
        let entry = LeaderboardEntry::new(username, score, mode);

        sqlx::query(
            r#"
            INSERT INTO leaderboard (
                id,
                username,
                score,
                mode,
                date
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(&entry.username)
        .bind(entry.score)
        .bind(entry.mode.as_str())
        .bind(entry.date)
        .execute(&self.pool)
        .await?;

        Ok(entry)
    }

    async fn top_scores(&self, mode: Option<GameMode>) -> ArcadeResult<Vec<LeaderboardEntry>> {
        let rows = match mode {
            Some(mode) => {
                sqlx::query_as::<_, LeaderboardRow>(
                    r#"
                    SELECT
                        id,
                        username,
                        score,
                        mode,
                        date
                    FROM leaderboard
                    WHERE mode = $1
                    ORDER BY score DESC, seq ASC
                    LIMIT 10
                    "#,
                )
                .bind(mode.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, LeaderboardRow>(
                    r#"
                    SELECT
                        id,
                        username,
                        score,
                        mode,
                        date
                    FROM leaderboard
                    ORDER BY score DESC, seq ASC
                    LIMIT 10
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.into_iter().map(LeaderboardRow::into_entry).collect()
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    id: Uuid,
    username: String,
    score: i32,
    mode: String,
    date: NaiveDate,
}

impl LeaderboardRow {
    fn into_entry(self) -> ArcadeResult<LeaderboardEntry> {
        let mode = self
            .mode
            .parse::<GameMode>()
            .map_err(ArcadeError::Internal)?;

        Ok(LeaderboardEntry {
            id: EntryId::from_uuid(self.id),
            username: self.username,
            score: self.score,
            mode,
            date: self.date,
        })
    }
}
