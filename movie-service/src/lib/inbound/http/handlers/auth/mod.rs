use serde::Serialize;

use crate::domain::user::models::AuthSession;
use crate::domain::user::models::CurrentUser;

pub mod login;
pub mod logout;
pub mod me;
pub mod register;
pub mod status;

/// Public view of an account. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
}

impl From<&CurrentUser> for UserData {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionData {
    pub token: String,
    pub user: UserData,
}

impl From<&AuthSession> for SessionData {
    fn from(session: &AuthSession) -> Self {
        Self {
            token: session.token.clone(),
            user: (&session.user).into(),
        }
    }
}
