// errors.rs
use crate::llm::LlmError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, bad input) or downstream layers (model API, spreadsheet export).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Analysis failed: {0}")]
    Upstream(#[from] LlmError),
    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::PayloadTooLarge => 413,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
                500
            }
        }
    }

    /// Message shown to users, without the variant prefix.
    pub fn user_message(&self) -> String {
        match self {
            ServerError::BadRequest(msg) => msg.clone(),
            ServerError::Upstream(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
