use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::CurrentUser;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::user::errors::UnauthenticatedReason;
use crate::user::errors::UserError;

const BEARER_PREFIX: &str = "Bearer ";

/// Middleware that resolves the bearer token into a [`CurrentUser`] request extension.
///
/// Every failure (no header, wrong scheme, bad or expired token, unknown
/// subject) produces the same 401 body; only the log line differs.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .map_err(|reason| {
            log_rejection(&reason);
            ApiError::unauthenticated()
        })?
        .to_string();

    let current_user = state
        .auth_service
        .resolve_current_user(&token)
        .await
        .map_err(|e| {
            if let UserError::Unauthenticated(reason) = &e {
                log_rejection(reason);
            }
            ApiError::from(e)
        })?;

    tracing::debug!(user_id = %current_user.id, "Request authenticated");
    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}

/// Extract the token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, UnauthenticatedReason> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(UnauthenticatedReason::MissingHeader)?
        .to_str()
        .map_err(|_| UnauthenticatedReason::MalformedHeader)?;

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(UnauthenticatedReason::MalformedHeader)?
        .trim();

    if token.is_empty() {
        return Err(UnauthenticatedReason::EmptyToken);
    }

    Ok(token)
}

fn log_rejection(reason: &UnauthenticatedReason) {
    match reason {
        UnauthenticatedReason::MissingHeader => {
            tracing::debug!(reason = %reason, "Unauthenticated request rejected");
        }
        _ => tracing::warn!(reason = %reason, "Unauthenticated request rejected"),
    }
}

/// Handlers take `CurrentUser` as an argument; without a resolved identity
/// the request is rejected before the handler body runs.
#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(ApiError::unauthenticated)
    }
}
