use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::movie::MovieId;
use crate::domain::ownership::Owned;
use crate::domain::review::errors::CommentError;
use crate::domain::review::errors::RatingError;
use crate::domain::review::errors::ReviewIdError;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// One user's rating of one movie. At most one per `(user_id, movie_id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    /// Author's username, carried for display.
    pub username: Username,
    pub movie_id: MovieId,
    pub rating: Rating,
    pub comment: Option<ReviewComment>,
    pub created_at: DateTime<Utc>,
}

impl Owned for Review {
    fn owner_id(&self) -> UserId {
        self.user_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReviewId(pub Uuid);

impl ReviewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ReviewIdError> {
        Uuid::parse_str(s)
            .map(ReviewId)
            .map_err(|_| ReviewIdError::InvalidFormat(s.to_string()))
    }
}

impl Default for ReviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Star rating, 1 to 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    /// * `OutOfRange` - Outside 1..=5
    pub fn new(raw: i64) -> Result<Self, RatingError> {
        if raw < i64::from(Self::MIN) || raw > i64::from(Self::MAX) {
            return Err(RatingError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: raw,
            });
        }
        Ok(Self(raw as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Free-text comment, trimmed, never blank, at most 2000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewComment(String);

impl ReviewComment {
    const MAX_LENGTH: usize = 2000;

    /// Normalize an optional raw comment. Blank input yields `None`.
    ///
    /// # Errors
    /// * `TooLong` - More than 2000 characters after trimming
    pub fn parse(raw: Option<String>) -> Result<Option<Self>, CommentError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CommentError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Some(Self(trimmed.to_string())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create or replace the caller's review of a movie
#[derive(Debug, Clone)]
pub struct SaveReviewCommand {
    pub movie_id: MovieId,
    pub rating: Rating,
    pub comment: Option<ReviewComment>,
}

impl SaveReviewCommand {
    pub fn new(movie_id: MovieId, rating: Rating, comment: Option<ReviewComment>) -> Self {
        Self {
            movie_id,
            rating,
            comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert_eq!(
            Rating::new(0),
            Err(RatingError::OutOfRange {
                min: 1,
                max: 5,
                actual: 0
            })
        );
        assert!(Rating::new(6).is_err());
        assert!(Rating::new(-3).is_err());
    }

    #[test]
    fn test_comment_is_trimmed_and_blank_is_none() {
        assert_eq!(ReviewComment::parse(None), Ok(None));
        assert_eq!(ReviewComment::parse(Some("   \n".to_string())), Ok(None));

        let comment = ReviewComment::parse(Some("  Great film  ".to_string()))
            .unwrap()
            .unwrap();
        assert_eq!(comment.as_str(), "Great film");
    }

    #[test]
    fn test_comment_length_limit() {
        assert!(ReviewComment::parse(Some("a".repeat(2000))).is_ok());
        assert_eq!(
            ReviewComment::parse(Some("a".repeat(2001))),
            Err(CommentError::TooLong {
                max: 2000,
                actual: 2001
            })
        );
    }

    #[test]
    fn test_review_id_parsing() {
        let id = ReviewId::new();
        assert_eq!(ReviewId::from_string(&id.to_string()), Ok(id));
        assert!(ReviewId::from_string("42").is_err());
    }
}
