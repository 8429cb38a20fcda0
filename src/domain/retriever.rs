//! Query-time retrieval over the per-mode knowledge bases

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::embedding::Embedder;
use super::error::DomainError;
use super::knowledge_base::{KnowledgeBase, ModeStatus, SearchResult};
use super::mode::Mode;

/// Embeds a query and returns the nearest chunks for one mode. The
/// knowledge-base map is built once at startup and shared read-only, so
/// concurrent queries need no locking.
#[derive(Debug, Clone)]
pub struct Retriever {
    knowledge_bases: Arc<HashMap<Mode, KnowledgeBase>>,
    embedder: Arc<dyn Embedder>,
}

impl Retriever {
    pub fn new(
        knowledge_bases: Arc<HashMap<Mode, KnowledgeBase>>,
        embedder: Arc<dyn Embedder>,
    ) -> Self {
        Self {
            knowledge_bases,
            embedder,
        }
    }

    pub fn is_ready(&self, mode: Mode) -> bool {
        self.knowledge_bases
            .get(&mode)
            .is_some_and(KnowledgeBase::is_ready)
    }

    pub fn status(&self, mode: Mode) -> ModeStatus {
        self.knowledge_bases
            .get(&mode)
            .map(KnowledgeBase::status)
            .unwrap_or(ModeStatus {
                ready: false,
                document_count: 0,
            })
    }

    /// Top-k nearest chunks for `query` in `mode`, ascending by distance.
    ///
    /// A mode that never became ready yields an empty result without
    /// calling the embedder. This is the "no context available yet"
    /// signal, distinct from an error.
    pub async fn search(
        &self,
        query: &str,
        mode: Mode,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, DomainError> {
        let Some(kb) = self.knowledge_bases.get(&mode).filter(|kb| kb.is_ready()) else {
            debug!(%mode, "knowledge base not ready, returning empty search result");
            return Ok(Vec::new());
        };

        let query_vector = self.embedder.embed(query).await?;
        Ok(kb.search(&query_vector, top_k))
    }
}
