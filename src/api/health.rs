//! Health check endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::domain::Mode;

use super::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub professional: &'static str,
    pub tutorial: &'static str,
}

/// GET /health - liveness plus per-mode readiness summary
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let readiness = |mode| {
        if state.retriever.is_ready(mode) {
            "ready"
        } else {
            "not loaded"
        }
    };

    let response = HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION").to_string(),
        professional: readiness(Mode::Professional),
        tutorial: readiness(Mode::Tutorial),
    };

    (StatusCode::OK, Json(response))
}
