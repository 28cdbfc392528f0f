use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::VerifiedToken;
use super::errors::JwtError;

/// Signs and verifies self-contained bearer tokens (HS256 JWT).
///
/// Tokens are stateless: nothing is recorded server-side, so a token stays
/// valid until its embedded expiry even after the holder "logs out". A stolen,
/// unexpired token is accepted; there is no revocation list. Server-side
/// logout would need a denylist or short-lived tokens plus refresh, which
/// changes this contract.
///
/// Expiry is checked against server time with no grace window unless
/// [`TokenCodec::with_leeway`] configures one.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validation: Validation,
    issuer: Option<String>,
}

impl TokenCodec {
    /// Create a codec with a symmetric signing secret.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Load it once at startup from configuration, never from code
    pub fn new(secret: &[u8]) -> Self {
        let algorithm = Algorithm::HS256;

        let mut validation = Validation::new(algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "iat", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            validation,
            issuer: None,
        }
    }

    /// Accept tokens up to `seconds` past their expiry.
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.validation.leeway = seconds;
        self
    }

    /// Stamp issued tokens with `iss` and reject tokens from any other issuer.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        let issuer = issuer.into();
        self.validation.set_issuer(&[issuer.as_str()]);
        self.issuer = Some(issuer);
        self
    }

    /// Issue a token for `subject`, valid for `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, JwtError> {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token as if the clock read `issued_at`.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue_at(
        &self,
        subject: &str,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let mut claims = Claims::for_subject(subject, issued_at, ttl)?;
        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer.clone());
        }

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Verify signature, structure and expiry, returning the asserted subject.
    ///
    /// # Errors
    /// * `InvalidSignature` - Signed with another key or tampered with
    /// * `Malformed` - Not a JWT, wrong algorithm, missing or invalid claims
    /// * `Expired` - Past `exp` (plus configured leeway)
    pub fn parse(&self, token: &str) -> Result<VerifiedToken, JwtError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::Expired,
                    ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                    _ => JwtError::Malformed(e.to_string()),
                }
            })?;

        VerifiedToken::try_from(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"my_secret_key_at_least_32_bytes_long!";

    #[test]
    fn test_issue_and_parse() {
        let codec = TokenCodec::new(SECRET);

        let token = codec
            .issue("alice@x.com", Duration::hours(1))
            .expect("Failed to issue token");
        assert_eq!(token.split('.').count(), 3);

        let verified = codec.parse(&token).expect("Failed to parse token");
        assert_eq!(verified.subject, "alice@x.com");
        assert_eq!(
            (verified.expires_at - verified.issued_at).num_seconds(),
            60 * 60
        );
    }

    #[test]
    fn test_parse_garbage_is_malformed() {
        let codec = TokenCodec::new(SECRET);

        for token in ["", "invalid.token.here", "not-a-jwt", "a.b"] {
            assert!(
                matches!(codec.parse(token), Err(JwtError::Malformed(_))),
                "expected malformed for {token:?}"
            );
        }
    }

    #[test]
    fn test_parse_with_wrong_secret() {
        let issuer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = issuer
            .issue("alice@x.com", Duration::hours(1))
            .expect("Failed to issue token");

        assert_eq!(verifier.parse(&token), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_tampered_payload_fails_signature() {
        let codec = TokenCodec::new(SECRET);
        let genuine = codec
            .issue("alice@x.com", Duration::hours(1))
            .expect("Failed to issue token");
        let forged = codec
            .issue("mallory@x.com", Duration::hours(1))
            .expect("Failed to issue token");

        let genuine_parts: Vec<&str> = genuine.split('.').collect();
        let forged_parts: Vec<&str> = forged.split('.').collect();
        let spliced = format!(
            "{}.{}.{}",
            genuine_parts[0], forged_parts[1], genuine_parts[2]
        );

        assert_eq!(codec.parse(&spliced), Err(JwtError::InvalidSignature));
    }

    #[test]
    fn test_expired_token() {
        let codec = TokenCodec::new(SECRET);
        let token = codec
            .issue_at(
                "alice@x.com",
                Duration::minutes(30),
                Utc::now() - Duration::hours(1),
            )
            .expect("Failed to issue token");

        assert_eq!(codec.parse(&token), Err(JwtError::Expired));
    }

    #[test]
    fn test_leeway_accepts_recently_expired_token() {
        let codec = TokenCodec::new(SECRET).with_leeway(120);
        let token = codec
            .issue_at(
                "alice@x.com",
                Duration::seconds(60),
                Utc::now() - Duration::seconds(90),
            )
            .expect("Failed to issue token");

        assert!(codec.parse(&token).is_ok());
        assert_eq!(
            TokenCodec::new(SECRET).parse(&token),
            Err(JwtError::Expired)
        );
    }

    #[test]
    fn test_issuer_mismatch_is_rejected() {
        let ours = TokenCodec::new(SECRET).with_issuer("moviedash");
        let theirs = TokenCodec::new(SECRET).with_issuer("someone-else");

        let token = theirs
            .issue("alice@x.com", Duration::hours(1))
            .expect("Failed to issue token");

        assert!(matches!(ours.parse(&token), Err(JwtError::Malformed(_))));
        assert!(theirs.parse(&token).is_ok());
    }

    #[test]
    fn test_tokens_for_same_subject_differ() {
        let codec = TokenCodec::new(SECRET);

        let first = codec.issue("alice@x.com", Duration::hours(1)).unwrap();
        let second = codec.issue("alice@x.com", Duration::hours(1)).unwrap();

        assert_ne!(first, second);
        assert!(codec.parse(&first).is_ok());
        assert!(codec.parse(&second).is_ok());
    }
}
