use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::MovieId;
use crate::domain::user::models::UserId;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::models::WatchlistEntry;
use crate::domain::watchlist::models::WatchlistEntryId;
use crate::domain::watchlist::ports::WatchlistRepository;

pub struct PostgresWatchlistRepository {
    pool: PgPool,
}

impl PostgresWatchlistRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct WatchlistRow {
    id: Uuid,
    user_id: Uuid,
    movie_id: i32,
    added_at: DateTime<Utc>,
}

impl TryFrom<WatchlistRow> for WatchlistEntry {
    type Error = WatchlistError;

    fn try_from(row: WatchlistRow) -> Result<Self, Self::Error> {
        Ok(WatchlistEntry {
            id: WatchlistEntryId(row.id),
            user_id: UserId(row.user_id),
            movie_id: MovieId::new(i64::from(row.movie_id))?,
            added_at: row.added_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> WatchlistError {
    WatchlistError::DatabaseError(e.to_string())
}

#[async_trait]
impl WatchlistRepository for PostgresWatchlistRepository {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        sqlx::query_as::<_, WatchlistRow>(
            r#"
            SELECT id, user_id, movie_id, added_at
            FROM watchlist
            WHERE user_id = $1
            ORDER BY added_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(WatchlistEntry::try_from)
        .collect()
    }

    async fn create(&self, entry: WatchlistEntry) -> Result<WatchlistEntry, WatchlistError> {
        sqlx::query(
            r#"
            INSERT INTO watchlist (id, user_id, movie_id, added_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(entry.id.0)
        .bind(entry.user_id.0)
        .bind(entry.movie_id.value())
        .bind(entry.added_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return WatchlistError::AlreadyListed(entry.movie_id);
                }
            }
            database_error(e)
        })?;

        Ok(entry)
    }

    async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError> {
        let result = sqlx::query("DELETE FROM watchlist WHERE user_id = $1 AND movie_id = $2")
            .bind(user_id.0)
            .bind(movie_id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM watchlist WHERE user_id = $1 AND movie_id = $2)",
        )
        .bind(user_id.0)
        .bind(movie_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }
}
