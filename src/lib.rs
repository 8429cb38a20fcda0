//! Portfolio Assistant API
//!
//! A retrieval-augmented chatbot service for a personal portfolio site:
//! - ingests CV/background documents and tutorial sources at startup
//! - keeps one isolated knowledge base per mode (professional, tutorial)
//! - answers questions by retrieving nearest chunks and conditioning an
//!   OpenAI completion on them

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};

use api::AppState;
use domain::{ChatOrchestrator, Completer, DomainError, Embedder, Mode, Retriever};
use infrastructure::{build_knowledge_base, HttpClient, OpenAiCompleter, OpenAiEmbedder};

/// Construct the application state: wire the OpenAI providers, ingest
/// both knowledge bases, and assemble the retriever and orchestrator.
///
/// A mode whose ingestion stops early (embedding failure) is served with
/// whatever it loaded; a configuration error aborts startup.
pub async fn build_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = config
        .openai_api_key()
        .context("OPENAI_API_KEY is not set")?;

    let embedder: Arc<dyn Embedder> = Arc::new(
        OpenAiEmbedder::with_base_url(HttpClient::new(), &api_key, &config.openai.base_url)
            .with_model(&config.openai.embedding_model),
    );
    let completer: Arc<dyn Completer> = Arc::new(
        OpenAiCompleter::with_base_url(HttpClient::new(), &api_key, &config.openai.base_url)
            .with_model(&config.openai.chat_model),
    );

    let mut knowledge_bases = HashMap::new();

    for mode in Mode::ALL {
        info!(%mode, "loading knowledge base");
        let (kb, result) = build_knowledge_base(
            mode,
            config.sources.for_mode(mode),
            &config.chunking,
            embedder.as_ref(),
        )
        .await;

        match result {
            Ok(()) => {}
            Err(e @ DomainError::Configuration { .. }) => {
                return Err(anyhow::Error::new(e).context("invalid chunking configuration"));
            }
            Err(e) => {
                error!(%mode, error = %e, "ingestion stopped early, serving what was loaded");
            }
        }

        knowledge_bases.insert(mode, kb);
    }

    let retriever = Retriever::new(Arc::new(knowledge_bases), embedder);
    let orchestrator = ChatOrchestrator::new(retriever.clone(), completer);

    Ok(AppState::new(retriever, orchestrator))
}
