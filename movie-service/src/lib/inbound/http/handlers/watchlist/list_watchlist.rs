use axum::extract::State;

use super::WatchlistEntryData;
use crate::domain::user::models::CurrentUser;
use crate::domain::watchlist::ports::WatchlistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_watchlist(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<ApiSuccess<Vec<WatchlistEntryData>>, ApiError> {
    state
        .watchlist_service
        .list_watchlist(&current_user)
        .await
        .map_err(ApiError::from)
        .map(|entries| ApiSuccess::ok(entries.iter().map(WatchlistEntryData::from).collect()))
}
