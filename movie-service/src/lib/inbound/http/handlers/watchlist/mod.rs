use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::watchlist::models::WatchlistEntry;

pub mod add_to_watchlist;
pub mod check_watchlist;
pub mod list_watchlist;
pub mod remove_from_watchlist;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntryData {
    pub id: String,
    pub movie_id: i32,
    pub added_at: DateTime<Utc>,
}

impl From<&WatchlistEntry> for WatchlistEntryData {
    fn from(entry: &WatchlistEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            movie_id: entry.movie_id.value(),
            added_at: entry.added_at,
        }
    }
}
