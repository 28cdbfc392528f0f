use thiserror::Error;

use crate::domain::movie::MovieId;
use crate::domain::movie::MovieIdError;

/// Top-level error for watchlist operations
#[derive(Debug, Clone, Error)]
pub enum WatchlistError {
    #[error("{0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("Movie already in watchlist")]
    AlreadyListed(MovieId),

    #[error("Movie not in watchlist")]
    NotFound(MovieId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for WatchlistError {
    fn from(err: anyhow::Error) -> Self {
        WatchlistError::Unknown(err.to_string())
    }
}
