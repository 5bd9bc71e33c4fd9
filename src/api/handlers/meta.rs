//! Service metadata handlers

use axum::Json;
use serde::Serialize;

use super::tasks::MessageResponse;

#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
}

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the pomo ToDo and Pomodoro API!".to_string(),
    })
}

/// GET /version
pub async fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
