//! Authentication utilities library
//!
//! Provides the credential primitives the services build on:
//! - Password hashing (Argon2id, salted, constant-time verification)
//! - Stateless bearer tokens (HS256 JWT) with explicit expiry
//! - Authentication coordination
//!
//! Knows nothing about users, storage or HTTP; each service adapts these
//! primitives to its own domain.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let token = codec.issue("alice@x.com", Duration::hours(1)).unwrap();
//! let verified = codec.parse(&token).unwrap();
//! assert_eq!(verified.subject, "alice@x.com");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth =
//!     Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24)).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", Some(&hash), "alice@x.com")
//!     .unwrap();
//!
//! // Later requests: validate token
//! let verified = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(verified.subject, "alice@x.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use jwt::VerifiedToken;
pub use password::PasswordError;
pub use password::PasswordHasher;
