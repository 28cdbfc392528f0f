use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::MovieId;
use crate::domain::user::models::CurrentUser;
use crate::domain::watchlist::errors::WatchlistError;
use crate::domain::watchlist::models::WatchlistEntry;
use crate::domain::watchlist::ports::WatchlistRepository;
use crate::domain::watchlist::ports::WatchlistServicePort;

pub struct WatchlistService<WR>
where
    WR: WatchlistRepository,
{
    repository: Arc<WR>,
}

impl<WR> WatchlistService<WR>
where
    WR: WatchlistRepository,
{
    pub fn new(repository: Arc<WR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<WR> WatchlistServicePort for WatchlistService<WR>
where
    WR: WatchlistRepository,
{
    async fn list_watchlist(
        &self,
        owner: &CurrentUser,
    ) -> Result<Vec<WatchlistEntry>, WatchlistError> {
        self.repository.list_by_user(&owner.id).await
    }

    async fn add_to_watchlist(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<WatchlistEntry, WatchlistError> {
        let entry = self
            .repository
            .create(WatchlistEntry::new(owner.id, movie_id))
            .await?;

        tracing::info!(user_id = %owner.id, movie_id = %movie_id, "Added to watchlist");
        Ok(entry)
    }

    async fn remove_from_watchlist(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<(), WatchlistError> {
        if !self.repository.delete(&owner.id, movie_id).await? {
            return Err(WatchlistError::NotFound(movie_id));
        }

        tracing::info!(user_id = %owner.id, movie_id = %movie_id, "Removed from watchlist");
        Ok(())
    }

    async fn is_on_watchlist(
        &self,
        owner: &CurrentUser,
        movie_id: MovieId,
    ) -> Result<bool, WatchlistError> {
        self.repository.exists(&owner.id, movie_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::Username;

    mock! {
        pub TestWatchlistRepository {}

        #[async_trait]
        impl WatchlistRepository for TestWatchlistRepository {
            async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<WatchlistEntry>, WatchlistError>;
            async fn create(&self, entry: WatchlistEntry) -> Result<WatchlistEntry, WatchlistError>;
            async fn delete(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError>;
            async fn exists(&self, user_id: &UserId, movie_id: MovieId) -> Result<bool, WatchlistError>;
        }
    }

    fn bob() -> CurrentUser {
        CurrentUser {
            id: UserId::new(),
            username: Username::new("bob".to_string()).unwrap(),
            email: EmailAddress::new("bob@x.com".to_string()).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_add_to_watchlist() {
        let bob = bob();
        let bob_id = bob.id;

        let mut repository = MockTestWatchlistRepository::new();
        repository
            .expect_create()
            .withf(move |entry| entry.user_id == bob_id && entry.movie_id.value() == 603)
            .times(1)
            .returning(|entry| Ok(entry));

        let service = WatchlistService::new(Arc::new(repository));

        let entry = service
            .add_to_watchlist(&bob, MovieId::new(603).unwrap())
            .await
            .unwrap();
        assert!(bob.owns(&entry));
    }

    #[tokio::test]
    async fn test_add_to_watchlist_twice() {
        let mut repository = MockTestWatchlistRepository::new();
        repository
            .expect_create()
            .returning(|entry| Err(WatchlistError::AlreadyListed(entry.movie_id)));

        let service = WatchlistService::new(Arc::new(repository));

        let err = service
            .add_to_watchlist(&bob(), MovieId::new(603).unwrap())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Movie already in watchlist");
    }

    #[tokio::test]
    async fn test_remove_missing_entry() {
        let mut repository = MockTestWatchlistRepository::new();
        repository
            .expect_delete()
            .times(1)
            .returning(|_, _| Ok(false));

        let service = WatchlistService::new(Arc::new(repository));

        let err = service
            .remove_from_watchlist(&bob(), MovieId::new(603).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, WatchlistError::NotFound(_)));
    }
}
