use crate::llm::models::{ChatRequest, ChatResponse};
use crate::llm::LlmError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

pub const OPENAI_DEFAULT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Anything that can answer a chat-completion request with message text.
pub trait ChatBackend {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, LlmError>;
}

/// OpenAI-compatible chat-completions endpoint.
pub struct OpenAiClient {
    client: Client,
    url: String,
}

impl OpenAiClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ChatBackend for OpenAiClient {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let data: ChatResponse = response.json()?;
        data.into_content().ok_or(LlmError::MissingContent)
    }
}

/// OpenAI wraps failures as `{"error": {"message": ...}}`; fall back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                "(no body)".to_string()
            } else {
                body.to_string()
            }
        })
}
