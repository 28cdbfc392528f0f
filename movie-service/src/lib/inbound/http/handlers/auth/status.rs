use serde::Serialize;

use crate::inbound::http::handlers::ApiSuccess;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusData {
    pub status: String,
    pub message: String,
}

pub async fn status() -> ApiSuccess<StatusData> {
    ApiSuccess::ok(StatusData {
        status: "running".to_string(),
        message: "MovieDash API is working!".to_string(),
    })
}
