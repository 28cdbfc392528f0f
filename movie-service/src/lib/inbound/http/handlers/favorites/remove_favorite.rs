use axum::extract::Path;
use axum::extract::State;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn remove_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(movie_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let movie_id = movie_id
        .parse::<MovieId>()
        .map_err(FavoriteError::from)?;

    state
        .favorite_service
        .remove_favorite(&current_user, movie_id)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::ok(MessageData::new("Removed from favorites")))
}
