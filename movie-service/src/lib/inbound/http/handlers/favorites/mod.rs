use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::favorite::models::Favorite;

pub mod add_favorite;
pub mod check_favorite;
pub mod list_favorites;
pub mod remove_favorite;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteData {
    pub id: String,
    pub movie_id: i32,
    pub added_at: DateTime<Utc>,
}

impl From<&Favorite> for FavoriteData {
    fn from(favorite: &Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            movie_id: favorite.movie_id.value(),
            added_at: favorite.added_at,
        }
    }
}
