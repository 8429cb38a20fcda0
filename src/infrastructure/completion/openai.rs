//! OpenAI chat-completions provider implementation

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Completer, CompletionRequest, DomainError};
use crate::infrastructure::http_client::HttpClientTrait;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-mini";

/// OpenAI chat-completions provider
#[derive(Debug)]
pub struct OpenAiCompleter<C: HttpClientTrait> {
    client: C,
    auth_header: String,
    base_url: String,
    model: String,
}

impl<C: HttpClientTrait> OpenAiCompleter<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            auth_header: format!("Bearer {}", api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            client,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Authorization", self.auth_header.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_request(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": request.messages,
        });

        if let Some(temperature) = request.temperature {
            body["temperature"] = serde_json::json!(temperature);
        }

        body
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let response: OpenAiChatResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::generation(format!("Failed to parse completion response: {}", e))
        })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::generation("No choices in response"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> Completer for OpenAiCompleter<C> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, DomainError> {
        let body = self.build_request(&request);

        let response = self
            .client
            .post_json(&self.chat_completions_url(), self.headers(), &body)
            .await
            .map_err(|e| DomainError::generation(e.to_string()))?;

        self.parse_response(response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Message;
    use crate::infrastructure::http_client::MockHttpClient;

    const TEST_URL: &str = "https://api.openai.com/v1/chat/completions";

    fn mock_response(content: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-123",
            "model": "gpt-4.1-mini",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16 }
        })
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice() {
        let client = MockHttpClient::new().with_response(TEST_URL, mock_response("Hi there"));
        let completer = OpenAiCompleter::new(client, "test-api-key");

        let request = CompletionRequest::new(vec![Message::user("Hello")]).with_temperature(0.2);
        let answer = completer.complete(request).await.unwrap();

        assert_eq!(answer, "Hi there");
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_generation_failure() {
        let client = MockHttpClient::new().with_error(TEST_URL, "model overloaded");
        let completer = OpenAiCompleter::new(client, "test-api-key");

        let request = CompletionRequest::new(vec![Message::user("Hello")]);
        let result = completer.complete(request).await;

        assert!(matches!(result, Err(DomainError::Generation { .. })));
    }

    #[tokio::test]
    async fn test_empty_choices_rejected() {
        let client =
            MockHttpClient::new().with_response(TEST_URL, serde_json::json!({"choices": []}));
        let completer = OpenAiCompleter::new(client, "test-api-key");

        let request = CompletionRequest::new(vec![Message::user("Hello")]);
        let result = completer.complete(request).await;

        assert!(matches!(result, Err(DomainError::Generation { .. })));
    }
}
