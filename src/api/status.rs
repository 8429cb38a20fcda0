//! Readiness status endpoint handler

use axum::{extract::State, Json};

use crate::api::state::AppState;
use crate::api::types::StatusResponse;
use crate::domain::Mode;

/// GET /status
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        professional: state.retriever.status(Mode::Professional),
        tutorial: state.retriever.status(Mode::Tutorial),
    })
}
