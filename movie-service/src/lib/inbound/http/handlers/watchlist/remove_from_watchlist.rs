use axum::extract::Path;
use axum::extract::State;

use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::ports::WatchlistServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(movie_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let movie_id = movie_id
        .parse::<MovieId>()
        .map_err(WatchlistError::from)?;

    state
        .watchlist_service
        .remove_from_watchlist(&current_user, movie_id)
        .await?;

    Ok(ApiSuccess::ok(MessageData::new("Movie removed from watchlist")))
}
