use async_trait::async_trait;

use crate::domain::user::models::AuthSession;
use crate::domain::user::models::CurrentUser;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for the authentication service: credential lifecycle and identity resolution.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Create an account and issue a token for it.
    ///
    /// # Arguments
    /// * `command` - Validated username, email and plaintext password
    ///
    /// # Returns
    /// Token bound to the new account's email, plus its public data
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Username or email is already registered
    /// * `DatabaseError` - Database operation failed
    /// * `Unknown` - Hashing or token encoding failed
    async fn register(&self, command: RegisterCommand) -> Result<AuthSession, UserError>;

    /// Exchange credentials for a token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `DatabaseError` - Database operation failed
    /// * `Unknown` - Hashing or token encoding failed
    async fn login(&self, command: LoginCommand) -> Result<AuthSession, UserError>;

    /// Recover the acting identity from a bearer token.
    ///
    /// The subject is looked up on every call, so a token for a deleted
    /// account stops resolving even while its signature is still valid.
    ///
    /// # Errors
    /// * `Unauthenticated` - Token invalid, expired, or subject has no account
    /// * `DatabaseError` - Database operation failed
    async fn resolve_current_user(&self, token: &str) -> Result<CurrentUser, UserError>;

    /// Acknowledge a logout. Tokens are stateless, so nothing is invalidated.
    async fn logout(&self) -> Result<(), UserError>;
}

/// Persistence operations for user aggregate (the credential store).
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// Uniqueness of username and email is enforced atomically with the
    /// insert; a collision writes nothing.
    ///
    /// # Errors
    /// * `DuplicateIdentity` - Username or email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve user by email address (exact match).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError>;

    /// Check whether a username is taken.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Check whether an email is registered.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, UserError>;
}
