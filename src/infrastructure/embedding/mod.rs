//! Embedding provider implementations

mod openai;

pub use openai::OpenAiEmbedder;
