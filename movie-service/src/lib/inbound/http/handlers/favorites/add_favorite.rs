use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::FavoriteData;
use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn add_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<ApiSuccess<FavoriteData>, ApiError> {
    let Json(body) = payload?;
    let movie_id = MovieId::new(body.movie_id).map_err(FavoriteError::from)?;

    state
        .favorite_service
        .add_favorite(&current_user, movie_id)
        .await
        .map_err(ApiError::from)
        .map(|ref favorite| ApiSuccess::new(StatusCode::CREATED, favorite.into()))
}

/// HTTP request body for adding a favorite (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    movie_id: i64,
}
