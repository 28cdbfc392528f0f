use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::WatchlistEntryData;
use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::ports::WatchlistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn add_to_watchlist(
    State(state): State<AppState>,
    current_user: CurrentUser,
    payload: Result<Json<AddToWatchlistRequest>, JsonRejection>,
) -> Result<ApiSuccess<WatchlistEntryData>, ApiError> {
    let Json(body) = payload?;
    let movie_id = MovieId::new(body.movie_id).map_err(WatchlistError::from)?;

    state
        .watchlist_service
        .add_to_watchlist(&current_user, movie_id)
        .await
        .map_err(ApiError::from)
        .map(|ref entry| ApiSuccess::new(StatusCode::CREATED, entry.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToWatchlistRequest {
    movie_id: i64,
}
