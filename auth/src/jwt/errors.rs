use thiserror::Error;

/// Error type for token operations.
///
/// Parse failures stay distinguishable here so callers can log the cause;
/// callers are expected to collapse them into one unauthenticated outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token is expired")]
    Expired,
}
