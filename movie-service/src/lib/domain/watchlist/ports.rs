use async_trait::async_trait;

use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::domain::user::models::UserId;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::models::WatchlistEntry;

/// Port for the caller's watch-later list.
#[async_trait]
pub trait WatchlistServicePort: Send + Sync + 'static {
    /// The owner's watchlist, most recently added first.
    async fn list_watchlist(&self, owner: &CurrentUser)
        -> Result<Vec<WatchlistEntry>, WatchlistError>;

    /// # Errors
    /// * `AlreadyListed` - Movie is already queued
    /// * `DatabaseError` - Database operation failed
    async fn add_to_watchlist(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<WatchlistEntry, WatchlistError>;

    /// # Errors
    /// * `NotFound` - Movie is not on the owner's watchlist
    /// * `DatabaseError` - Database operation failed
    async fn remove_from_watchlist(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<(), WatchlistError>;

    async fn is_on_watchlist(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<bool, WatchlistError>;
}

/// Persistence operations for watchlist entries. `(user_id, movie_id)` is unique.
#[async_trait]
pub trait WatchlistRepository: Send + Sync + 'static {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WatchlistEntry>, WatchlistError>;

    async fn create(&self, entry: WatchlistEntry) -> Result<WatchlistEntry, WatchlistError>;

    /// Returns whether a row was removed.
    async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError>;

    async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError>;
}
