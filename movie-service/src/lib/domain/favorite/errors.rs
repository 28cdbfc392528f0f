use thiserror::Error;

use crate::domain::movie::MovieId;
use crate::domain::movie::MovieIdError;

/// Top-level error for favorites operations
#[derive(Debug, Clone, Error)]
pub enum FavoriteError {
    #[error("{0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Movie already in favorites")]
    AlreadyFavorited(MovieId),

    #[error("Favorite not found")]
    NotFound(MovieId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for FavoriteError {
    fn from(err: anyhow::Error) -> Self {
        FavoriteError::Unknown(err.to_string())
    }
}
