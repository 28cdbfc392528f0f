use std::env;

use auth::Authenticator;
use auth::PasswordError;
use auth::TokenCodec;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use thiserror::Error;

/// Minimum signing secret length for HS256 (256 bits).
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime: one year.
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    pub expiration_hours: i64,
    #[serde(default)]
    pub leeway_seconds: u64,
    #[serde(default)]
    pub issuer: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Name the colliding field ("Email already in use") on duplicate registration.
    #[serde(default = "default_reveal_duplicate_field")]
    pub reveal_duplicate_field: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            reveal_duplicate_field: default_reveal_duplicate_field(),
        }
    }
}

/// Startup configuration rejected by [`Config::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("jwt.secret is not set")]
    MissingSecret,

    #[error("jwt.secret too short: minimum {min} bytes, got {actual}")]
    SecretTooShort { min: usize, actual: usize },

    #[error("jwt.expiration_hours must be positive, got {0}")]
    NonPositiveExpiration(i64),

    #[error("jwt.expiration_hours too long: maximum {max}, got {actual}")]
    ExpirationTooLong { max: i64, actual: i64 },

    #[error("database.url is required for the postgres backend")]
    MissingDatabaseUrl,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::default().separator("__").try_parsing(true))
            .build()?;

        configuration.try_deserialize()
    }

    /// Reject configurations the service must not start with.
    ///
    /// # Errors
    /// * `MissingSecret` / `SecretTooShort` - Signing secret absent or under 32 bytes
    /// * `NonPositiveExpiration` - Token lifetime is zero or negative
    /// * `ExpirationTooLong` - Token lifetime above [`MAX_EXPIRATION_HOURS`]
    /// * `MissingDatabaseUrl` - Postgres backend selected without a URL
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let secret_len = self.jwt.secret.len();
        if secret_len == 0 {
            return Err(ConfigValidationError::MissingSecret);
        }
        if secret_len < MIN_SECRET_BYTES {
            return Err(ConfigValidationError::SecretTooShort {
                min: MIN_SECRET_BYTES,
                actual: secret_len,
            });
        }

        if self.jwt.expiration_hours <= 0 {
            return Err(ConfigValidationError::NonPositiveExpiration(
                self.jwt.expiration_hours,
            ));
        }
        if self.jwt.expiration_hours > MAX_EXPIRATION_HOURS {
            return Err(ConfigValidationError::ExpirationTooLong {
                max: MAX_EXPIRATION_HOURS,
                actual: self.jwt.expiration_hours,
            });
        }

        let has_url = self
            .database
            .url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if self.database.backend == StorageBackend::Postgres && !has_url {
            return Err(ConfigValidationError::MissingDatabaseUrl);
        }

        Ok(())
    }

    pub fn http_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.http_port)
    }
}

impl JwtConfig {
    /// Token lifetime, clamped to the range [`Config::validate`] accepts.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.expiration_hours.clamp(0, MAX_EXPIRATION_HOURS))
    }

    /// Build the process-wide authenticator from this section.
    ///
    /// # Errors
    /// * `PasswordError` - The login timing placeholder could not be hashed
    pub fn authenticator(&self) -> Result<Authenticator, PasswordError> {
        let mut codec = TokenCodec::new(self.secret.as_bytes()).with_leeway(self.leeway_seconds);
        if let Some(issuer) = &self.issuer {
            codec = codec.with_issuer(issuer.clone());
        }

        Authenticator::with_codec(codec, self.token_ttl())
    }
}

// The secret must never reach logs, including through `{:?}` on the whole config.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .field("leeway_seconds", &self.leeway_seconds)
            .field("issuer", &self.issuer)
            .finish()
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_reveal_duplicate_field() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    const VALID: &str = r#"
        [server]
        http_port = 8080

        [database]
        backend = "postgres"
        url = "postgresql://localhost/moviedash"

        [jwt]
        secret = "0123456789abcdef0123456789abcdef"
        expiration_hours = 24
    "#;

    fn parse(toml: &str) -> Config {
        ConfigBuilder::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .expect("Failed to build config")
            .try_deserialize()
            .expect("Failed to deserialize config")
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = parse(VALID);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.jwt.leeway_seconds, 0);
        assert!(config.jwt.issuer.is_none());
        assert!(config.auth.reveal_duplicate_field);
        assert!(config.validate().is_ok());
        assert_eq!(config.http_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_memory_backend_needs_no_url() {
        let config = parse(
            r#"
            [server]
            http_port = 0

            [database]
            backend = "memory"

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"
            expiration_hours = 1

            [auth]
            reveal_duplicate_field = false
            "#,
        );

        assert_eq!(config.database.backend, StorageBackend::Memory);
        assert!(!config.auth.reveal_duplicate_field);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_secret() {
        let mut config = parse(VALID);
        config.jwt.secret = String::new();

        assert_eq!(config.validate(), Err(ConfigValidationError::MissingSecret));
    }

    #[test]
    fn test_rejects_short_secret() {
        let mut config = parse(VALID);
        config.jwt.secret = "short".to_string();

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::SecretTooShort { min: 32, actual: 5 })
        );
    }

    #[test]
    fn test_rejects_non_positive_expiration() {
        let mut config = parse(VALID);
        config.jwt.expiration_hours = 0;

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::NonPositiveExpiration(0))
        );
    }

    #[test]
    fn test_rejects_excessive_expiration() {
        let mut config = parse(VALID);
        config.jwt.expiration_hours = i64::MAX;

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ExpirationTooLong {
                max: MAX_EXPIRATION_HOURS,
                actual: i64::MAX,
            })
        );
        assert_eq!(
            config.jwt.token_ttl(),
            chrono::Duration::hours(MAX_EXPIRATION_HOURS)
        );

        config.jwt.expiration_hours = MAX_EXPIRATION_HOURS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_postgres_requires_url() {
        let mut config = parse(VALID);
        config.database.url = Some("  ".to_string());

        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingDatabaseUrl)
        );
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = parse(VALID);
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("0123456789abcdef"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_authenticator_honours_ttl() {
        let config = parse(VALID);
        let authenticator = config
            .jwt
            .authenticator()
            .expect("Failed to build authenticator");

        assert_eq!(authenticator.token_ttl(), chrono::Duration::hours(24));
        let issued = authenticator
            .issue_token("alice@x.com")
            .expect("Failed to issue token");
        assert!(authenticator.validate_token(&issued.access_token).is_ok());
    }
}
