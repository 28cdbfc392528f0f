use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::models::Favorite;
use crate::domain::favorite::ports::FavoriteRepository;
use crate::domain::favorite::ports::FavoriteServicePort;
use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;

/// Domain service for a user's favorites list. Every operation is scoped to the caller.
pub struct FavoriteService<FR>
where
    FR: FavoriteRepository,
{
    repository: Arc<FR>,
}

impl<FR> FavoriteService<FR>
where
    FR: FavoriteRepository,
{
    pub fn new(repository: Arc<FR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<FR> FavoriteServicePort for FavoriteService<FR>
where
    FR: FavoriteRepository,
{
    async fn list_favorites(&self, owner: &CurrentUser) -> Result<Vec<Favorite>, FavoriteError> {
        let favorites = self.repository.list_by_user(&owner.id).await?;
        tracing::debug!(user_id = %owner.id, count = favorites.len(), "Favorites listed");
        Ok(favorites)
    }

    async fn add_favorite(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<Favorite, FavoriteError> {
        let favorite = self
            .repository
            .create(Favorite::new(owner.id, movie_id))
            .await?;

        tracing::info!(user_id = %owner.id, movie_id = %movie_id, "Favorite added");
        Ok(favorite)
    }

    async fn remove_favorite(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<(), FavoriteError> {
        if !self.repository.delete(&owner.id, movie_id).await? {
            return Err(FavoriteError::NotFound(movie_id));
        }

        tracing::info!(user_id = %owner.id, movie_id = %movie_id, "Favorite removed");
        Ok(())
    }

    async fn is_favorite(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<bool, FavoriteError> {
        self.repository.exists(&owner.id, movie_id).await
    }
}
