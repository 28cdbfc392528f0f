use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::VerifiedToken;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

const TIMING_PLACEHOLDER_PASSWORD: &str = "placeholder-password-for-unknown-accounts";

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the process-wide signing secret (inside the codec) and the token
/// lifetime. Immutable after construction; share it behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    token_ttl: Duration,
    placeholder_hash: String,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,

    /// Instant after which the token is rejected
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `PasswordError` - The placeholder digest could not be hashed
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Result<Self, PasswordError> {
        Self::with_codec(TokenCodec::new(jwt_secret), token_ttl)
    }

    /// Create an authenticator around a preconfigured codec (issuer, leeway).
    ///
    /// The placeholder digest used for unknown accounts is hashed here, so
    /// no login pays for it.
    pub fn with_codec(
        token_codec: TokenCodec,
        token_ttl: Duration,
    ) -> Result<Self, PasswordError> {
        let password_hasher = PasswordHasher::new();
        let placeholder_hash = password_hasher.hash(TIMING_PLACEHOLDER_PASSWORD)?;

        Ok(Self {
            password_hasher,
            token_codec,
            token_ttl,
            placeholder_hash,
        })
    }

    /// Lifetime of tokens issued by this authenticator.
    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against a stored digest. Malformed digests never match.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// `stored_hash` is `None` when no account exists. A verification against
    /// a placeholder digest still runs in that case, so both failure paths do
    /// the same amount of work and return the same error.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No account, or password does not match
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: Option<&str>,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = match stored_hash {
            Some(hash) => self.password_hasher.verify(password, hash),
            None => {
                self.password_hasher.verify(password, &self.placeholder_hash);
                false
            }
        };

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(subject)?)
    }

    /// Issue a token without password verification (e.g. right after registration).
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<AuthenticationResult, JwtError> {
        let issued_at = Utc::now();
        let expires_at = issued_at
            .checked_add_signed(self.token_ttl)
            .ok_or_else(|| JwtError::EncodingFailed("token expiry out of range".to_string()))?;
        let access_token = self
            .token_codec
            .issue_at(subject, self.token_ttl, issued_at)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at,
        })
    }

    /// Validate a bearer token and return what it asserts.
    ///
    /// # Errors
    /// * `JwtError` - Signature mismatch, malformed token, or expired
    pub fn validate_token(&self, token: &str) -> Result<VerifiedToken, JwtError> {
        self.token_codec.parse(token)
    }
}
