//! Embedding provider seam

use async_trait::async_trait;
use std::fmt::Debug;

use super::error::DomainError;

/// Converts text to a fixed-dimension vector. Implementations do not
/// retry; a failure aborts the ingestion step or query in progress.
#[async_trait]
pub trait Embedder: Send + Sync + Debug {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, DomainError>;

    fn provider_name(&self) -> &'static str;
}
