//! Retrieval-augmented chat orchestration

use std::sync::Arc;

use tracing::debug;

use super::completion::{Completer, CompletionRequest, Message};
use super::error::DomainError;
use super::knowledge_base::SearchResult;
use super::mode::Mode;
use super::retriever::Retriever;

/// Number of chunks retrieved as context for each question.
const CONTEXT_TOP_K: usize = 3;

/// Most recent conversation turns carried into the prompt.
const HISTORY_WINDOW: usize = 6;

/// Deterministic-leaning sampling, favoring faithfulness to the context.
const CHAT_TEMPERATURE: f32 = 0.2;

const EMPTY_CONTEXT_PLACEHOLDER: &str = "No relevant information found in knowledge base.";

const PROFESSIONAL_PERSONA: &str = "\
You are a professional assistant for a personal portfolio website.

Your role is to answer questions about the portfolio owner's:
- Professional experience and work history
- Technical skills and certifications
- Education and qualifications
- Projects and achievements

Guidelines:
- Be professional and concise
- Only answer based on the provided context (CV/professional info)
- If asked something not in the context, politely redirect to what you know
- Be helpful and represent the portfolio owner positively

Always base your answers on the provided context.";

const TUTORIAL_PERSONA: &str = "\
You are a teaching assistant for a personal portfolio website.

Your role is to explain how the site's space effects (black hole,
starfield, wormhole, spacetime warp) were created using Three.js, GLSL
shaders, and WebGL.

Guidelines:
- Be friendly and educational
- Break down complex concepts into simple explanations
- Use analogies when helpful
- Reference the code examples in the context
- If asked about something not in the context, say you can only help
  with the space effects

Always base your answers on the provided context.";

/// Assembles a generation prompt from retrieved context, a mode-specific
/// persona and a bounded history window, then invokes the completer.
#[derive(Debug, Clone)]
pub struct ChatOrchestrator {
    retriever: Retriever,
    completer: Arc<dyn Completer>,
}

impl ChatOrchestrator {
    pub fn new(retriever: Retriever, completer: Arc<dyn Completer>) -> Self {
        Self {
            retriever,
            completer,
        }
    }

    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }

    /// Answer `question` in `mode`, conditioning the completion on the
    /// top retrieved chunks and the most recent history turns.
    pub async fn chat(
        &self,
        question: &str,
        mode: Mode,
        history: &[Message],
    ) -> Result<String, DomainError> {
        if !self.retriever.is_ready(mode) {
            return Err(DomainError::mode_not_ready(mode));
        }

        let results = self.retriever.search(question, mode, CONTEXT_TOP_K).await?;
        debug!(%mode, hits = results.len(), "assembling chat context");

        let context = build_context_block(&results);

        let mut messages = Vec::with_capacity(history.len().min(HISTORY_WINDOW) + 3);
        messages.push(Message::system(persona(mode)));
        messages.push(Message::system(format!(
            "Context from knowledge base:\n\n{context}"
        )));

        let tail_start = history.len().saturating_sub(HISTORY_WINDOW);
        messages.extend_from_slice(&history[tail_start..]);

        messages.push(Message::user(question));

        let request = CompletionRequest::new(messages).with_temperature(CHAT_TEMPERATURE);
        self.completer.complete(request).await
    }
}

/// Persona lookup; the mode set is closed, so this is exhaustive.
fn persona(mode: Mode) -> &'static str {
    match mode {
        Mode::Professional => PROFESSIONAL_PERSONA,
        Mode::Tutorial => TUTORIAL_PERSONA,
    }
}

/// Labeled source blocks in ranked order, or a fixed placeholder so
/// generation still proceeds when retrieval came back empty.
fn build_context_block(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return EMPTY_CONTEXT_PLACEHOLDER.to_string();
    }

    results
        .iter()
        .map(|r| format!("[Source: {}]\n{}", r.source, r.content))
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}
