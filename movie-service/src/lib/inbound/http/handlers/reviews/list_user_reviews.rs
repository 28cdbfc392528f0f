use axum::extract::State;

use super::to_data;
use super::ReviewData;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_user_reviews(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<ApiSuccess<Vec<ReviewData>>, ApiError> {
    state
        .review_service
        .list_user_reviews(&current_user)
        .await
        .map_err(ApiError::from)
        .map(|reviews| ApiSuccess::ok(to_data(reviews)))
}
