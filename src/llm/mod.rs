mod cascade;
mod client;
mod llm_error;
mod models;
mod prompt;

pub use cascade::analyze_listing;
pub use client::{ChatBackend, OpenAiClient, OPENAI_DEFAULT_URL};
pub use llm_error::{FailedAttempt, LlmError};
pub use models::ChatRequest;
