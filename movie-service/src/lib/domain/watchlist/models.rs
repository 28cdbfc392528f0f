use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::movie::MovieId;
use crate::domain::ownership::Owned;
use crate::domain::user::models::UserId;

/// A movie one user has queued to watch later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    pub id: WatchlistEntryId,
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub added_at: DateTime<Utc>,
}

impl WatchlistEntry {
    pub fn new(owner: UserId, movie_id: MovieId) -> Self {
        Self {
            id: WatchlistEntryId::new(),
            user_id: owner,
            movie_id,
            added_at: Utc::now(),
        }
    }
}

impl Owned for WatchlistEntry {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchlistEntryId(pub Uuid);

impl WatchlistEntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WatchlistEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WatchlistEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
