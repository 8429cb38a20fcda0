//! Request/response schemas for the HTTP boundary

mod error;

pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType};

use serde::{Deserialize, Serialize};

use crate::domain::{Message, MessageRole, ModeStatus, SearchResult};

/// One caller-supplied conversation turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: MessageRole,
    pub content: String,
}

impl From<ChatTurn> for Message {
    fn from(turn: ChatTurn) -> Self {
        Message {
            role: turn.role,
            content: turn.content,
        }
    }
}

/// POST /chat request body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

fn default_mode() -> String {
    "professional".to_string()
}

/// POST /chat response body
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub mode: String,
    pub sources: Vec<String>,
}

/// POST /search request body
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    3
}

/// POST /search response body
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// GET /status response body
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub professional: ModeStatus,
    pub tutorial: ModeStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_defaults() {
        let request: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();

        assert_eq!(request.mode, "professional");
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_chat_turn_into_message() {
        let turn = ChatTurn {
            role: MessageRole::Assistant,
            content: "earlier answer".to_string(),
        };

        let message: Message = turn.into();
        assert_eq!(message.role, MessageRole::Assistant);
    }

    #[test]
    fn test_search_request_defaults() {
        let request: SearchRequest =
            serde_json::from_str(r#"{"query": "certification", "mode": "tutorial"}"#).unwrap();

        assert_eq!(request.top_k, 3);
        assert_eq!(request.mode, "tutorial");
    }
}
