use axum::extract::Path;
use axum::extract::State;
use serde::Serialize;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn check_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(movie_id): Path<String>,
) -> Result<ApiSuccess<FavoriteStatusData>, ApiError> {
    let movie_id = movie_id
        .parse::<MovieId>()
        .map_err(FavoriteError::from)?;

    let favorite = state
        .favorite_service
        .is_favorite(&current_user, movie_id)
        .await?;

    Ok(ApiSuccess::ok(FavoriteStatusData {
        movie_id: movie_id.value(),
        favorite,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusData {
    pub movie_id: i32,
    pub favorite: bool,
}
