use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ReviewData;
use crate::domain::movie::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Rating;
use crate::domain::review::models::ReviewComment;
use crate::domain::review::models::SaveReviewCommand;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Create or update the caller's review of a movie. 200 in both cases.
pub async fn save_review(
    State(state): State<AppState>,
    current_user: CurrentUser,
    payload: Result<Json<SaveReviewRequest>, JsonRejection>,
) -> Result<ApiSuccess<ReviewData>, ApiError> {
    let Json(body) = payload?;

    state
        .review_service
        .save_review(&current_user, body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref review| ApiSuccess::ok(review.into()))
}

/// HTTP request body for saving a review (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReviewRequest {
    movie_id: i64,
    rating: i64,
    #[serde(default)]
    comment: Option<String>,
}

impl SaveReviewRequest {
    fn try_into_command(self) -> Result<SaveReviewCommand, ReviewError> {
        let movie_id = MovieId::new(self.movie_id)?;
        let rating = Rating::new(self.rating)?;
        let comment = ReviewComment::parse(self.comment)?;
        Ok(SaveReviewCommand::new(movie_id, rating, comment))
    }
}
