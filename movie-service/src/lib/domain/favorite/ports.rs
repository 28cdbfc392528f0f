use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::Favorite;
use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::domain::user::models::UserId;

/// Port for favorites operations on behalf of a resolved identity.
#[async_trait]
pub trait FavoriteServicePort: Send + Sync + 'static {
    /// The owner's favorites, newest first.
    async fn list_favorites(&self, owner: &CurrentUser) -> Result<Vec<Favorite>, FavoriteError>;

    /// Add a movie to the owner's favorites.
    ///
    /// # Errors
    /// * `AlreadyFavorited` - Movie is already on the list
    /// * `DatabaseError` - Database operation failed
    async fn add_favorite(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<Favorite, FavoriteError>;

    /// Remove a movie from the owner's favorites.
    ///
    /// # Errors
    /// * `NotFound` - Movie is not on the owner's list
    /// * `DatabaseError` - Database operation failed
    async fn remove_favorite(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<(), FavoriteError>;

    async fn is_favorite(&self, owner: &CurrentUser, movie_id: MovieId)
        -> Result<bool, FavoriteError>;
}

/// Persistence operations for favorites.
#[async_trait]
pub trait FavoriteRepository: Send + Sync + 'static {
    /// Favorites of one user, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, FavoriteError>;

    /// Insert a favorite; `(user_id, movie_id)` is unique.
    ///
    /// # Errors
    /// * `AlreadyFavorited` - Pair already stored
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, favorite: Favorite) -> Result<Favorite, FavoriteError>;

    /// Delete the user's favorite for a movie. Returns whether a row was removed.
    async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, FavoriteError>;

    async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, FavoriteError>;
}
