use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::Favorite;
use crate::domain::favorite::models::FavoriteId;
use crate::domain::favorite::ports::FavoriteRepository;
use crate::domain::movie::MovieId;
use crate::domain::user::models::UserId;

pub struct PostgresFavoriteRepository {
    pool: PgPool,
}

impl PostgresFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FavoriteRow {
    id: Uuid,
    user_id: Uuid,
    movie_id: i32,
    added_at: DateTime<Utc>,
}

impl TryFrom<FavoriteRow> for Favorite {
    type Error = FavoriteError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        Ok(Favorite {
            id: FavoriteId(row.id),
            user_id: UserId(row.user_id),
            movie_id: MovieId::new(i64::from(row.movie_id))?,
            added_at: row.added_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> FavoriteError {
    FavoriteError::DatabaseError(e.to_string())
}

#[async_trait]
impl FavoriteRepository for PostgresFavoriteRepository {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, FavoriteError> {
        sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT id, user_id, movie_id, added_at
            FROM favorites
            WHERE user_id = $1
            ORDER BY added_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Favorite::try_from)
        .collect()
    }

    async fn create(&self, favorite: Favorite) -> Result<Favorite, FavoriteError> {
        sqlx::query(
            r#"
            INSERT INTO favorites (id, user_id, movie_id, added_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(favorite.id.0)
        .bind(favorite.user_id.0)
        .bind(favorite.movie_id.value())
        .bind(favorite.added_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return FavoriteError::AlreadyFavorited(favorite.movie_id);
                }
            }
            database_error(e)
        })?;

        Ok(favorite)
    }

    async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, FavoriteError> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND movie_id = $2")
            .bind(user_id.0)
            .bind(movie_id.value())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, FavoriteError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND movie_id = $2)",
        )
        .bind(user_id.0)
        .bind(movie_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)
    }
}
