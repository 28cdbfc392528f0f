use std::fmt;

use auth::JwtError;
use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username is required")]
    Blank,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required")]
    Blank,

    #[error("Email too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for plaintext password validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password is required")]
    Blank,
}

/// Identity field that collided on registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    Username,
    Email,
}

impl fmt::Display for DuplicateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateField::Username => f.write_str("username"),
            DuplicateField::Email => f.write_str("email"),
        }
    }
}

/// Why a request could not be tied to an identity. Logged, never sent to clients.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnauthenticatedReason {
    #[error("missing Authorization header")]
    MissingHeader,

    #[error("Authorization header is not a Bearer credential")]
    MalformedHeader,

    #[error("empty bearer token")]
    EmptyToken,

    #[error("invalid token: {0}")]
    InvalidToken(#[from] JwtError),

    #[error("token subject has no account")]
    UnknownSubject,
}

/// Top-level error for all user and authentication operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("{0}")]
    InvalidUsername(#[from] UsernameError),

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("{0}")]
    InvalidPassword(#[from] PasswordError),

    // Domain-level errors
    #[error("{}", duplicate_message(.field))]
    DuplicateIdentity { field: Option<DuplicateField> },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated(UnauthenticatedReason),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

fn duplicate_message(field: &Option<DuplicateField>) -> &'static str {
    match field {
        Some(DuplicateField::Email) => "Email already in use",
        Some(DuplicateField::Username) => "Username already taken",
        None => "Username or email already registered",
    }
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}
