use crate::domain::ListingInput;
use crate::llm::prompt::{listing_prompt, ANALYST_INSTRUCTIONS};
use serde::{Deserialize, Serialize};

pub const MAX_OUTPUT_TOKENS: u32 = 1500;
const CHAT_TEMPERATURE: f64 = 0.1;

/// How a model family wants its request shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProfile {
    /// o-series reasoning models: no system role, no temperature,
    /// `max_completion_tokens` instead of `max_tokens`.
    Reasoning,
    Chat,
}

impl ModelProfile {
    pub fn for_model(model: &str) -> Self {
        let name = model.trim().to_ascii_lowercase();
        let reasoning = ["o1", "o3", "o4"]
            .iter()
            .any(|family| name == *family || name.starts_with(&format!("{family}-")));

        if reasoning {
            ModelProfile::Reasoning
        } else {
            ModelProfile::Chat
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
    pub response_format: ResponseFormat,
}

impl ChatRequest {
    /// Request asking `model` to score `listing`, shaped for the model's family.
    pub fn for_listing(model: &str, listing: &ListingInput) -> Self {
        let user = listing_prompt(listing);
        let response_format = ResponseFormat {
            kind: "json_object".to_string(),
        };

        match ModelProfile::for_model(model) {
            ModelProfile::Reasoning => Self {
                model: model.to_string(),
                messages: vec![ChatMessage::new(
                    "user",
                    format!("{ANALYST_INSTRUCTIONS}\n\n{user}"),
                )],
                temperature: None,
                max_tokens: None,
                max_completion_tokens: Some(MAX_OUTPUT_TOKENS),
                response_format,
            },
            ModelProfile::Chat => Self {
                model: model.to_string(),
                messages: vec![
                    ChatMessage::new("system", ANALYST_INSTRUCTIONS),
                    ChatMessage::new("user", user),
                ],
                temperature: Some(CHAT_TEMPERATURE),
                max_tokens: Some(MAX_OUTPUT_TOKENS),
                max_completion_tokens: None,
                response_format,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatMessageResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatMessageResponse {
    pub content: Option<String>,
}

impl ChatResponse {
    pub fn into_content(self) -> Option<String> {
        self.choices?
            .into_iter()
            .next()?
            .message?
            .content
            .filter(|c| !c.trim().is_empty())
    }
}
