use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::domain::session::SessionStore;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Readiness: the gateway is up and reports whether a user session is held
pub async fn health_ready(State(session): State<SessionStore>) -> impl IntoResponse {
    let session_state = match session.current_user().await {
        Some(_) => "active",
        None => "none",
    };
    (
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "session": session_state,
        })),
    )
}
