use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::movie::MovieId;
use crate::domain::ownership::ensure_owner;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::models::SaveReviewCommand;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::CurrentUser;

/// Domain service for movie reviews.
pub struct ReviewService<RR>
where
    RR: ReviewRepository,
{
    repository: Arc<RR>,
}

impl<RR> ReviewService<RR>
where
    RR: ReviewRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> ReviewServicePort for ReviewService<RR>
where
    RR: ReviewRepository,
{
    async fn list_movie_reviews(&self, movie_id: MovieId) -> Result<Vec<Review>, ReviewError> {
        self.repository.list_by_movie(movie_id).await
    }

    async fn list_user_reviews(&self, owner: &CurrentUser) -> Result<Vec<Review>, ReviewError> {
        self.repository.list_by_user(&owner.id).await
    }

    async fn save_review(
        &self,
        author: &CurrentUser,
        command: SaveReviewCommand,
    ) -> Result<Review, ReviewError> {
        let candidate = Review {
            id: ReviewId::new(),
            user_id: author.id,
            username: author.username.clone(),
            movie_id: command.movie_id,
            rating: command.rating,
            comment: command.comment,
            created_at: Utc::now(),
        };

        let review = self.repository.upsert(candidate).await?;

        tracing::info!(
            user_id = %author.id,
            movie_id = %review.movie_id,
            review_id = %review.id,
            rating = review.rating.value(),
            "Review saved"
        );
        Ok(review)
    }

    async fn delete_review(&self, actor: &CurrentUser, id: &ReviewId) -> Result<(), ReviewError> {
        let review = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))?;

        ensure_owner(actor, &review).map_err(|e| {
            tracing::warn!(review_id = %id, reason = %e, "Review deletion refused");
            ReviewError::from(e)
        })?;

        self.repository.delete(id).await?;

        tracing::info!(user_id = %actor.id, review_id = %id, "Review deleted");
        Ok(())
    }
}
