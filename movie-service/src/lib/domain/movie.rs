use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error for MovieId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MovieIdError {
    #[error("Invalid movie ID: {0}")]
    InvalidFormat(String),

    #[error("Invalid movie ID: must be positive, got {0}")]
    NotPositive(i64),

    #[error("Invalid movie ID: {0} is out of range")]
    OutOfRange(i64),
}

/// External catalogue (TMDb) movie identifier. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(i32);

impl MovieId {
    /// # Errors
    /// * `NotPositive` - Zero or negative
    /// * `OutOfRange` - Does not fit a 32-bit id
    pub fn new(raw: i64) -> Result<Self, MovieIdError> {
        if raw <= 0 {
            return Err(MovieIdError::NotPositive(raw));
        }
        i32::try_from(raw)
            .map(MovieId)
            .map_err(|_| MovieIdError::OutOfRange(raw))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl FromStr for MovieId {
    type Err = MovieIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| MovieIdError::InvalidFormat(s.to_string()))?;
        Self::new(raw)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_bounds() {
        assert_eq!(MovieId::new(550).unwrap().value(), 550);
        assert_eq!(MovieId::new(0), Err(MovieIdError::NotPositive(0)));
        assert_eq!(MovieId::new(-7), Err(MovieIdError::NotPositive(-7)));
        assert_eq!(
            MovieId::new(i64::from(i32::MAX) + 1),
            Err(MovieIdError::OutOfRange(i64::from(i32::MAX) + 1))
        );
    }

    #[test]
    fn test_movie_id_from_path_segment() {
        assert_eq!("603".parse::<MovieId>().unwrap().value(), 603);
        assert!(matches!(
            "abc".parse::<MovieId>(),
            Err(MovieIdError::InvalidFormat(_))
        ));
        assert_eq!("-1".parse::<MovieId>(), Err(MovieIdError::NotPositive(-1)));
    }
}
