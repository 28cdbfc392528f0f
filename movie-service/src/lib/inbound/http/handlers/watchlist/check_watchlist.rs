use axum::extract::Path;
use axum::extract::State;
use serde::Serialize;

use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::ports::WatchlistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn check_watchlist(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(movie_id): Path<String>,
) -> Result<ApiSuccess<WatchlistStatusData>, ApiError> {
    let movie_id = movie_id
        .parse::<MovieId>()
        .map_err(WatchlistError::from)?;

    let in_watchlist = state
        .watchlist_service
        .is_on_watchlist(&current_user, movie_id)
        .await?;

    Ok(ApiSuccess::ok(WatchlistStatusData {
        movie_id: movie_id.value(),
        in_watchlist,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistStatusData {
    pub movie_id: i32,
    pub in_watchlist: bool,
}
