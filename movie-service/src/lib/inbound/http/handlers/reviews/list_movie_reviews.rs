use axum::extract::Path;
use axum::extract::State;

use super::to_data;
use super::ReviewData;
use crate::domain::movie::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::ports::ReviewServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_movie_reviews(
    State(state): State<AppState>,
    Path(movie_id): Path<String>,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    let movie_id = movie_id.parse::<MovieId>().map_err(ReviewError::from)?;

    state
        .review_service
        .list_movie_reviews(movie_id)
        .await
        .map_err(ApiError::from)
        .map(|reviews| ApiSuccess::ok(to_data(reviews)))
}
