use async_trait::async_trait;

use crate::domain::movie::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::models::SaveReviewCommand;
use crate::domain::user::models::CurrentUser;
use crate::domain::user::models::UserId;

/// Port for review operations.
#[async_trait]
pub trait ReviewServicePort: Send + Sync + 'static {
    /// All reviews of a movie, newest first. Public.
    async fn list_movie_reviews(&self, movie_id: MovieId) -> Result<Vec<Review>, ReviewError>;

    /// The caller's reviews, newest first.
    async fn list_user_reviews(&self, owner: &CurrentUser) -> Result<Vec<Review>, ReviewError>;

    /// Create the caller's review of a movie, or replace rating and comment
    /// of the existing one (same id, same creation time).
    async fn save_review(
        &self,
        author: &CurrentUser,
        command: SaveReviewCommand,
    ) -> Result<Review, ReviewError>;

    /// Delete a review the caller owns.
    ///
    /// # Errors
    /// * `NotFound` - No review with this id
    /// * `Forbidden` - Review belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn delete_review(&self, actor: &CurrentUser, id: &ReviewId) -> Result<(), ReviewError>;
}

/// Persistence operations for reviews.
#[async_trait]
pub trait ReviewRepository: Send + Sync + 'static {
    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, ReviewError>;

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError>;

    /// Atomic insert-or-update keyed by `(user_id, movie_id)`.
    ///
    /// On conflict only rating and comment change; the stored review
    /// (with its original id and creation time) is returned.
    async fn upsert(&self, review: Review) -> Result<Review, ReviewError>;

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError>;

    /// # Errors
    /// * `NotFound` - No review with this id
    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError>;
}
