//! Chat endpoint handler

use axum::{extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ChatRequest, ChatResponse};
use crate::domain::{Message, Mode};

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let mode: Mode = request
        .mode
        .parse()
        .map_err(|e: crate::domain::UnknownMode| ApiError::bad_request(e.to_string()))?;

    info!(
        request_id = %request_id,
        %mode,
        history_turns = request.history.len(),
        "Processing chat request"
    );

    let history: Vec<Message> = request.history.into_iter().map(Into::into).collect();

    let answer = state
        .orchestrator
        .chat(&request.message, mode, &history)
        .await?;

    // Re-run retrieval so the response can cite its sources
    let sources = state
        .retriever
        .search(&request.message, mode, 3)
        .await?
        .into_iter()
        .map(|r| r.source)
        .collect();

    Ok(Json(ChatResponse {
        answer,
        mode: mode.to_string(),
        sources,
    }))
}
