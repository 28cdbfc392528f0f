use thiserror::Error;

use crate::domain::movie::MovieIdError;
use crate::domain::ownership::OwnershipError;

/// Error for ReviewId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReviewIdError {
    #[error("Invalid review ID: {0}")]
    InvalidFormat(String),
}

/// Error for Rating validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating must be between {min} and {max}, got {actual}")]
    OutOfRange { min: u8, max: u8, actual: i64 },
}

/// Error for review comment validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentError {
    #[error("Comment too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for review operations
#[derive(Debug, Clone, Error)]
pub enum ReviewError {
    #[error("{0}")]
    InvalidReviewId(#[from] ReviewIdError),

    #[error("{0}")]
    InvalidMovieId(#[from] MovieIdError),

    #[error("{0}")]
    InvalidRating(#[from] RatingError),

    #[error("{0}")]
    InvalidComment(#[from] CommentError),

    #[error("Review not found")]
    NotFound(String),

    #[error("Not authorized to delete this review")]
    Forbidden(#[from] OwnershipError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ReviewError {
    fn from(err: anyhow::Error) -> Self {
        ReviewError::Unknown(err.to_string())
    }
}
