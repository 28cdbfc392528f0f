use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::AuthSession;
use crate::domain::user::models::CurrentUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UnauthenticatedReason;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for registration, login and identity resolution.
///
/// Argon2 work runs on the blocking pool so request workers stay free.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
    reveal_duplicate_field: bool,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Process-wide hasher and token codec
    /// * `reveal_duplicate_field` - Name the colliding field on duplicate registration
    pub fn new(
        repository: Arc<UR>,
        authenticator: Arc<Authenticator>,
        reveal_duplicate_field: bool,
    ) -> Self {
        Self {
            repository,
            authenticator,
            reveal_duplicate_field,
        }
    }

    fn disclose(&self, err: UserError) -> UserError {
        match err {
            UserError::DuplicateIdentity { .. } if !self.reveal_duplicate_field => {
                UserError::DuplicateIdentity { field: None }
            }
            other => other,
        }
    }

    fn session(result: AuthenticationResult, user: User) -> AuthSession {
        AuthSession {
            token: result.access_token,
            expires_at: result.expires_at,
            user: user.into(),
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            tokio::task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await
                .map_err(|e| UserError::Unknown(format!("Hashing task failed: {}", e)))?
                .map_err(|e| UserError::Unknown(format!("Password hashing failed: {}", e)))?;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await.map_err(|e| {
            if let UserError::DuplicateIdentity { field } = &e {
                tracing::info!(field = ?field, "Registration rejected: identity already taken");
            }
            self.disclose(e)
        })?;

        tracing::info!(user_id = %created_user.id, "User registered");

        let result = self
            .authenticator
            .issue_token(created_user.email.as_str())
            .map_err(|e| UserError::Unknown(format!("Token generation failed: {}", e)))?;

        Ok(Self::session(result, created_user))
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError> {
        let user = self.repository.find_by_email(&command.email).await?;

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let subject = command.email.as_str().to_string();
        let password = command.password;
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(password.expose(), stored_hash.as_deref(), &subject)
        })
        .await
        .map_err(|e| UserError::Unknown(format!("Verification task failed: {}", e)))?;

        match (outcome, user) {
            (Ok(result), Some(user)) => {
                tracing::info!(user_id = %user.id, "User logged in");
                Ok(Self::session(result, user))
            }
            (Ok(_), None) | (Err(AuthenticationError::InvalidCredentials), None) => {
                tracing::info!(reason = "unknown_email", "Login rejected");
                Err(UserError::InvalidCredentials)
            }
            (Err(AuthenticationError::InvalidCredentials), Some(user)) => {
                tracing::warn!(user_id = %user.id, reason = "password_mismatch", "Login rejected");
                Err(UserError::InvalidCredentials)
            }
            (Err(AuthenticationError::PasswordError(e)), _) => Err(UserError::Unknown(format!(
                "Password verification failed: {}",
                e
            ))),
            (Err(AuthenticationError::JwtError(e)), _) => Err(UserError::Unknown(format!(
                "Token generation failed: {}",
                e
            ))),
        }
    }

    async fn resolve_current_user(&self, token: &str) -> Result<CurrentUser, UserError> {
        let verified = self
            .authenticator
            .validate_token(token)
            .map_err(|e| UserError::Unauthenticated(UnauthenticatedReason::InvalidToken(e)))?;

        let email = EmailAddress::new(verified.subject)
            .map_err(|_| UserError::Unauthenticated(UnauthenticatedReason::UnknownSubject))?;

        self.repository
            .find_by_email(&email)
            .await?
            .map(CurrentUser::from)
            .ok_or(UserError::Unauthenticated(
                UnauthenticatedReason::UnknownSubject,
            ))
    }

    async fn logout(&self) -> Result<(), UserError> {
        tracing::debug!("Logout acknowledged; issued tokens stay valid until expiry");
        Ok(())
    }
}
