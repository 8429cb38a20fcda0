//! Shared application state injected into request handlers

use crate::domain::{ChatOrchestrator, Retriever};

/// Built once at startup and cloned into every handler. Knowledge bases
/// are read-only after ingestion, so clones share them without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub retriever: Retriever,
    pub orchestrator: ChatOrchestrator,
}

impl AppState {
    pub fn new(retriever: Retriever, orchestrator: ChatOrchestrator) -> Self {
        Self {
            retriever,
            orchestrator,
        }
    }
}
