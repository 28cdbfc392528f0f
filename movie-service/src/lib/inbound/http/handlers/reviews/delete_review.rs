use axum::extract::Path;
use axum::extract::State;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewServicePort;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn delete_review(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let review_id = ReviewId::from_string(&id).map_err(ReviewError::from)?;

    state
        .review_service
        .delete_review(&current_user, &review_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageData::new("Review deleted successfully")))
}
