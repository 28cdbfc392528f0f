use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::movie::MovieId;
use crate::domain::ownership::Owned;
use crate::domain::user::models::UserId;

/// A movie on one user's favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub added_at: DateTime<Utc>,
}

impl Favorite {
    /// New favorite for `owner`, stamped with the current time.
    pub fn new(owner: UserId, movie_id: MovieId) -> Self {
        Self {
            id: FavoriteId::new(),
            user_id: owner,
            movie_id,
            added_at: Utc::now(),
        }
    }
}

impl Owned for Favorite {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FavoriteId(pub Uuid);

impl FavoriteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FavoriteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
