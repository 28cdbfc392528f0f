use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::errors::JwtError;

/// Registered JWT claims carried by every bearer token.
///
/// `jti` is random per token, so two tokens issued for the same subject in
/// the same second are still distinct strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject the token asserts (the account email)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Unique token identifier
    pub jti: String,

    /// Issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

impl Claims {
    /// Build claims for a subject, valid for `ttl` from `issued_at`.
    ///
    /// Fails when the expiry falls outside the representable date range.
    pub fn for_subject(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, JwtError> {
        let expiration = issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| JwtError::EncodingFailed("token expiry out of range".to_string()))?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
            iss: None,
        })
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Check if token is expired at the given Unix timestamp.
    ///
    /// The expiration second itself is still valid.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

/// Outcome of a successful token parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub subject: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub token_id: String,
}

impl TryFrom<Claims> for VerifiedToken {
    type Error = JwtError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        if claims.sub.is_empty() {
            return Err(JwtError::Malformed("empty subject".to_string()));
        }

        let issued_at = DateTime::<Utc>::from_timestamp(claims.iat, 0)
            .ok_or_else(|| JwtError::Malformed("iat out of range".to_string()))?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| JwtError::Malformed("exp out of range".to_string()))?;

        Ok(Self {
            subject: claims.sub,
            issued_at,
            expires_at,
            token_id: claims.jti,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let now = Utc::now();
        let claims = Claims::for_subject("alice@x.com", now, Duration::hours(24)).unwrap();

        assert_eq!(claims.sub, "alice@x.com");
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert!(claims.iss.is_none());
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn test_token_ids_are_unique() {
        let now = Utc::now();
        let first = Claims::for_subject("alice@x.com", now, Duration::hours(1)).unwrap();
        let second = Claims::for_subject("alice@x.com", now, Duration::hours(1)).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_is_expired() {
        let issued_at = DateTime::<Utc>::from_timestamp(900, 0).unwrap();
        let claims = Claims::for_subject("user", issued_at, Duration::seconds(100)).unwrap();

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000));
        assert!(claims.is_expired(1001));
    }

    #[test]
    fn test_issuer_is_omitted_when_unset() {
        let claims = Claims::for_subject("user", Utc::now(), Duration::minutes(5)).unwrap();
        let json = serde_json::to_value(&claims).unwrap();

        assert!(json.get("iss").is_none());

        let json = serde_json::to_value(claims.with_issuer("moviedash")).unwrap();
        assert_eq!(json["iss"], "moviedash");
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let result = Claims::for_subject("user", Utc::now(), Duration::days(100_000_000));

        assert!(matches!(result, Err(JwtError::EncodingFailed(_))));
    }

    #[test]
    fn test_verified_token_rejects_empty_subject() {
        let claims = Claims::for_subject("", Utc::now(), Duration::minutes(5)).unwrap();

        assert!(matches!(
            VerifiedToken::try_from(claims),
            Err(JwtError::Malformed(_))
        ));
    }
}
