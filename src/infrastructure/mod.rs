//! Infrastructure layer - provider clients, ingestion and logging

pub mod completion;
pub mod embedding;
pub mod http_client;
pub mod ingestion;
pub mod logging;

pub use completion::OpenAiCompleter;
pub use embedding::OpenAiEmbedder;
pub use http_client::{HttpClient, HttpClientTrait, HttpError};
pub use ingestion::{build_knowledge_base, ingest_sources};
