use axum::extract::State;

use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::MessageData;
use crate::inbound::http::router::AppState;

/// Stateless logout: the client discards its token; nothing is revoked server-side.
pub async fn logout(State(state): State<AppState>) -> Result<ApiSuccess<MessageData>, ApiError> {
    state.auth_service.logout().await?;
    Ok(ApiSuccess::ok(MessageData::new("Logged out successfully")))
}
