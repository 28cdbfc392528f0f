use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::movie::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Rating;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewComment;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

pub struct PostgresReviewRepository {
    pool: PgPool,
}

impl PostgresReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReviewRow {
    id: Uuid,
    user_id: Uuid,
    username: String,
    movie_id: i32,
    rating: i16,
    comment: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = ReviewError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        Ok(Review {
            id: ReviewId(row.id),
            user_id: UserId(row.user_id),
            username: Username::new(row.username)
                .map_err(|e| ReviewError::Unknown(format!("Stored username invalid: {}", e)))?,
            movie_id: MovieId::new(i64::from(row.movie_id))?,
            rating: Rating::new(i64::from(row.rating))?,
            comment: ReviewComment::parse(row.comment)?,
            created_at: row.created_at,
        })
    }
}

fn database_error(e: sqlx::Error) -> ReviewError {
    ReviewError::DatabaseError(e.to_string())
}

fn into_reviews(rows: Vec<ReviewRow>) -> Result<Vec<Review>, ReviewError> {
    rows.into_iter().map(Review::try_from).collect()
}

#[async_trait]
impl ReviewRepository for PostgresReviewRepository {
    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, ReviewError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT r.id, r.user_id, u.username, r.movie_id, r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.movie_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(movie_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        into_reviews(rows)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT r.id, r.user_id, u.username, r.movie_id, r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.user_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        into_reviews(rows)
    }

    async fn upsert(&self, review: Review) -> Result<Review, ReviewError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r#"
            WITH saved AS (
                INSERT INTO reviews (id, user_id, movie_id, rating, comment, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (user_id, movie_id)
                DO UPDATE SET rating = EXCLUDED.rating, comment = EXCLUDED.comment
                RETURNING id, user_id, movie_id, rating, comment, created_at
            )
            SELECT s.id, s.user_id, u.username, s.movie_id, s.rating, s.comment, s.created_at
            FROM saved s
            JOIN users u ON u.id = s.user_id
            "#,
        )
        .bind(review.id.0)
        .bind(review.user_id.0)
        .bind(review.movie_id.value())
        .bind(i16::from(review.rating.value()))
        .bind(review.comment.as_ref().map(|c| c.as_str()))
        .bind(review.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Review::try_from(row)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        sqlx::query_as::<_, ReviewRow>(
            r#"
            SELECT r.id, r.user_id, u.username, r.movie_id, r.rating, r.comment, r.created_at
            FROM reviews r
            JOIN users u ON u.id = r.user_id
            WHERE r.id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Review::try_from)
        .transpose()
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ReviewError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
