//! Per-mode knowledge base: chunk texts, source metadata and the vector
//! index, kept in lockstep.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::index::{VectorIndex, EMBEDDING_DIMENSION};
use super::mode::Mode;

/// Where a chunk came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSource {
    /// Source filename (not the full path)
    pub source: String,
    pub mode: Mode,
}

/// One retrieval hit, produced transiently per query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub content: String,
    pub source: String,
    /// Squared-L2 distance to the query; lower is closer
    pub score: f32,
}

/// Readiness summary for one mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModeStatus {
    pub ready: bool,
    pub document_count: usize,
}

/// Chunks, their sources, and vectors for a single mode. The i-th vector
/// in the index always corresponds to the i-th chunk. Nothing is ever
/// removed or updated in place; a content refresh means building a new
/// instance and swapping it in.
#[derive(Debug)]
pub struct KnowledgeBase {
    mode: Mode,
    chunks: Vec<String>,
    sources: Vec<ChunkSource>,
    index: VectorIndex,
}

impl KnowledgeBase {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            chunks: Vec::new(),
            sources: Vec::new(),
            index: VectorIndex::new(EMBEDDING_DIMENSION),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// A knowledge base is ready once it holds at least one chunk. Chunks
    /// are never removed, so readiness latches for the process lifetime.
    pub fn is_ready(&self) -> bool {
        !self.chunks.is_empty()
    }

    pub fn document_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn status(&self) -> ModeStatus {
        ModeStatus {
            ready: self.is_ready(),
            document_count: self.document_count(),
        }
    }

    /// Append a chunk, its source and its vector together, preserving the
    /// parallel-store invariant.
    pub fn push(
        &mut self,
        content: impl Into<String>,
        source: impl Into<String>,
        vector: Vec<f32>,
    ) -> Result<(), DomainError> {
        self.index.add(vector)?;
        self.chunks.push(content.into());
        self.sources.push(ChunkSource {
            source: source.into(),
            mode: self.mode,
        });

        debug_assert_eq!(self.chunks.len(), self.sources.len());
        debug_assert_eq!(self.chunks.len(), self.index.len());

        Ok(())
    }

    /// Scan the index and map positions back to chunk content and source.
    pub fn search(&self, query_vector: &[f32], top_k: usize) -> Vec<SearchResult> {
        self.index
            .search(query_vector, top_k)
            .into_iter()
            .map(|(position, score)| SearchResult {
                content: self.chunks[position].clone(),
                source: self.sources[position].source.clone(),
                score,
            })
            .collect()
    }

    #[cfg(test)]
    pub fn source_at(&self, position: usize) -> &ChunkSource {
        &self.sources[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(seed: f32) -> Vec<f32> {
        let mut v = vec![0.0; EMBEDDING_DIMENSION];
        v[0] = seed;
        v
    }

    #[test]
    fn test_starts_empty_and_not_ready() {
        let kb = KnowledgeBase::new(Mode::Professional);

        assert!(!kb.is_ready());
        assert_eq!(kb.document_count(), 0);
        assert!(!kb.status().ready);
    }

    #[test]
    fn test_ready_after_first_chunk() {
        let mut kb = KnowledgeBase::new(Mode::Professional);
        kb.push("chunk one", "cv.pdf", vector(1.0)).unwrap();

        assert!(kb.is_ready());
        assert_eq!(kb.document_count(), 1);
    }

    #[test]
    fn test_push_rejects_wrong_dimension_without_corrupting_state() {
        let mut kb = KnowledgeBase::new(Mode::Tutorial);
        kb.push("good", "a.txt", vector(1.0)).unwrap();

        let result = kb.push("bad", "b.txt", vec![1.0, 2.0]);

        assert!(result.is_err());
        assert_eq!(kb.document_count(), 1);
    }

    #[test]
    fn test_search_maps_positions_to_content_and_source() {
        let mut kb = KnowledgeBase::new(Mode::Professional);
        kb.push("first chunk", "cv.pdf", vector(0.0)).unwrap();
        kb.push("second chunk", "about.md", vector(10.0)).unwrap();

        let results = kb.search(&vector(10.0), 2);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].content, "second chunk");
        assert_eq!(results[0].source, "about.md");
        assert!(results[0].score < results[1].score);
    }

    #[test]
    fn test_metadata_carries_mode() {
        let mut kb = KnowledgeBase::new(Mode::Tutorial);
        kb.push("shader notes", "black_hole.vue", vector(1.0))
            .unwrap();

        assert_eq!(kb.source_at(0).mode, Mode::Tutorial);
    }
}
