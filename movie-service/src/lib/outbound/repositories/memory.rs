//! In-memory storage implementation
//!
//! Backs every repository port with process-local maps. Used by the
//! integration tests and by `database.backend = "memory"` for local runs.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::Favorite;
use crate::domain::favorite::models::FavoriteId;
use crate::domain::favorite::ports::FavoriteRepository;
use crate::domain::movie::MovieId;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::models::Review;
use crate::domain::review::models::ReviewId;
use crate::domain::review::ports::ReviewRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::models::WatchlistEntry;
use crate::domain::watchlist::models::WatchlistEntryId;
use crate::domain::watchlist::ports::WatchlistRepository;
use crate::user::errors::DuplicateField;
use crate::user::errors::UserError;

/// In-memory storage for development and testing
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    favorites: Arc<RwLock<HashMap<FavoriteId, Favorite>>>,
    reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
    watchlist: Arc<RwLock<HashMap<WatchlistEntryId, WatchlistEntry>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: User) -> Result<User, UserError> {
        // Check and insert under one write guard so racing registrations serialize.
        let mut users = self.users.write().await;

        // Email is checked first: a registration colliding on both reports the email.
        if users.values().any(|u| u.email == user.email) {
            return Err(UserError::DuplicateIdentity {
                field: Some(DuplicateField::Email),
            });
        }
        if users.values().any(|u| u.username == user.username) {
            return Err(UserError::DuplicateIdentity {
                field: Some(DuplicateField::Username),
            });
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| &u.username == username))
    }

    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| &u.email == email))
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Favorite>, FavoriteError> {
        let favorites = self.favorites.read().await;
        let mut owned: Vec<Favorite> = favorites
            .values()
            .filter(|f| &f.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(owned)
    }

    async fn create(&self, favorite: Favorite) -> Result<Favorite, FavoriteError> {
        let mut favorites = self.favorites.write().await;

        if favorites
            .values()
            .any(|f| f.user_id == favorite.user_id && f.movie_id == favorite.movie_id)
        {
            return Err(FavoriteError::AlreadyFavorited(favorite.movie_id));
        }

        favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, FavoriteError> {
        let mut favorites = self.favorites.write().await;
        let before = favorites.len();
        favorites.retain(|_, f| !(&f.user_id == user_id && f.movie_id == movie_id));
        Ok(favorites.len() < before)
    }

    async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, FavoriteError> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .any(|f| &f.user_id == user_id && f.movie_id == movie_id))
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryStore {
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        let watchlist = self.watchlist.read().await;
        let mut owned: Vec<WatchlistEntry> = watchlist
            .values()
            .filter(|e| &e.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        Ok(owned)
    }

    async fn create(&self, entry: WatchlistEntry) -> Result<WatchlistEntry, WatchlistError> {
        let mut watchlist = self.watchlist.write().await;

        if watchlist
            .values()
            .any(|e| e.user_id == entry.user_id && e.movie_id == entry.movie_id)
        {
            return Err(WatchlistError::AlreadyListed(entry.movie_id));
        }

        watchlist.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError> {
        let mut watchlist = self.watchlist.write().await;
        let before = watchlist.len();
        watchlist.retain(|_, e| !(&e.user_id == user_id && e.movie_id == movie_id));
        Ok(watchlist.len() < before)
    }

    async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError> {
        let watchlist = self.watchlist.read().await;
        Ok(watchlist
            .values()
            .any(|e| &e.user_id == user_id && e.movie_id == movie_id))
    }
}

fn newest_first(mut reviews: Vec<Review>) -> Vec<Review> {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    reviews
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    async fn list_by_movie(&self, movie_id: MovieId) -> Result<Vec<Review>, ReviewError> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(
            reviews
                .values()
                .filter(|r| r.movie_id == movie_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, ReviewError> {
        let reviews = self.reviews.read().await;
        Ok(newest_first(
            reviews
                .values()
                .filter(|r| &r.user_id == user_id)
                .cloned()
                .collect(),
        ))
    }

    async fn upsert(&self, review: Review) -> Result<Review, ReviewError> {
        let mut reviews = self.reviews.write().await;

        if let Some(existing) = reviews
            .values_mut()
            .find(|r| r.user_id == review.user_id && r.movie_id == review.movie_id)
        {
            existing.rating = review.rating;
            existing.comment = review.comment;
            return Ok(existing.clone());
        }

        reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn find_by_id(&self, id: &ReviewId) -> Result<Option<Review>, ReviewError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(id).cloned())
    }

    async fn delete(&self, id: &ReviewId) -> Result<(), ReviewError> {
        let mut reviews = self.reviews.write().await;
        reviews
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| ReviewError::NotFound(id.to_string()))
    }
}
