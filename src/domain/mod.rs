//! Domain layer - core RAG engine and collaborator seams

pub mod chat;
pub mod chunking;
pub mod completion;
pub mod embedding;
pub mod error;
pub mod index;
pub mod knowledge_base;
pub mod mode;
pub mod retriever;

pub use chat::ChatOrchestrator;
pub use chunking::{chunk, ChunkingConfig};
pub use completion::{Completer, CompletionRequest, Message, MessageRole};
pub use embedding::Embedder;
pub use error::DomainError;
pub use index::{VectorIndex, EMBEDDING_DIMENSION};
pub use knowledge_base::{ChunkSource, KnowledgeBase, ModeStatus, SearchResult};
pub use mode::{Mode, UnknownMode};
pub use retriever::Retriever;
