//! Completion capability and the OpenAI-compatible chat client.
//!
//! [`Completion`] is the one outbound seam of the service: complete a
//! prompt, return the raw assistant text. [`ChatCompletionClient`] is the
//! production implementation speaking the `/chat/completions` wire format
//! in JSON-object mode; tests substitute deterministic stubs.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::config::LlmConfig;
use crate::error::ApiError;

/// Upper bound on one completion round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A single-operation completion capability. One synchronous round trip,
/// no retries, no streaming.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError>;
}

/// OpenAI-compatible chat-completion client.
pub struct ChatCompletionClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl ChatCompletionClient {
    pub fn new(config: LlmConfig) -> Self {
        ChatCompletionClient {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl Completion for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        let body = json!({
            "model": self.config.model,
            "messages": [{
                "role": "system",
                "content": prompt
            }],
            "max_tokens": self.config.max_tokens,
            "response_format": { "type": "json_object" }
        });

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.chat_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|err| ApiError::Upstream(format!("completion request failed: {}", err)))?;

        let status = response.status();
        let body_text = response.text().await.map_err(|err| {
            ApiError::Upstream(format!("completion response read failed: {}", err))
        })?;

        if !status.is_success() {
            return Err(ApiError::Upstream(format!(
                "completion service returned {}: {}",
                status, body_text
            )));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body_text).map_err(|err| {
            ApiError::Upstream(format!("completion response parse failed: {}", err))
        })?;

        first_content(&parsed).ok_or_else(|| {
            ApiError::Upstream("completion reply missing assistant content".to_string())
        })
    }
}

/// Extracts the first choice's trimmed, non-empty message content.
fn first_content(response: &ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
