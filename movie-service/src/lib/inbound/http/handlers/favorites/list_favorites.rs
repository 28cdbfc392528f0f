use axum::extract::State;

use super::FavoriteData;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_favorites(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<ApiSuccess<Vec<FavoriteData>>, ApiError> {
    state
        .favorite_service
        .list_favorites(&current_user)
        .await
        .map_err(ApiError::from)
        .map(|favorites| ApiSuccess::ok(favorites.iter().map(FavoriteData::from).collect()))
}
