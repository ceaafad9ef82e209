use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Missing content in response")]
    MissingContent,
    #[error("No analysis models configured")]
    NoModels,
    #[error("All models failed: {summary}")]
    AllModelsFailed {
        attempts: Vec<FailedAttempt>,
        summary: String,
    },
}

/// One model that was tried and why it did not produce an analysis.
#[derive(Debug, Clone)]
pub struct FailedAttempt {
    pub model: String,
    pub error: String,
}

impl LlmError {
    pub fn all_failed(attempts: Vec<FailedAttempt>) -> Self {
        let summary = attempts
            .iter()
            .map(|a| format!("{} error: {}", a.model, a.error))
            .collect::<Vec<_>>()
            .join(", ");
        LlmError::AllModelsFailed { attempts, summary }
    }

    /// Models tried before giving up, in cascade order.
    pub fn models_attempted(&self) -> Vec<String> {
        match self {
            LlmError::AllModelsFailed { attempts, .. } => {
                attempts.iter().map(|a| a.model.clone()).collect()
            }
            _ => Vec::new(),
        }
    }
}
