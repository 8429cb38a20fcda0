//! Raw retrieval endpoint handler

use axum::{extract::State, Json};
use tracing::info;
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{ApiError, SearchRequest, SearchResponse};
use crate::domain::{Mode, UnknownMode};

/// POST /search
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let request_id = Uuid::new_v4().to_string();

    let mode: Mode = request
        .mode
        .parse()
        .map_err(|e: UnknownMode| ApiError::bad_request(e.to_string()))?;

    info!(
        request_id = %request_id,
        %mode,
        top_k = request.top_k,
        "Processing search request"
    );

    let results = state
        .retriever
        .search(&request.query, mode, request.top_k)
        .await?;

    Ok(Json(SearchResponse { results }))
}
