use crate::domain::ListingInput;
use crate::llm::client::ChatBackend;
use crate::llm::models::ChatRequest;
use crate::llm::{FailedAttempt, LlmError};
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{info, warn};

/// Asks each model in turn, once, and returns the first response.
///
/// The response is parsed leniently (see [`parse_model_content`]) and tagged
/// with `model_used` and `models_attempted`.
pub fn analyze_listing(
    backend: &dyn ChatBackend,
    models: &[String],
    api_key: &str,
    listing: &ListingInput,
) -> Result<Value, LlmError> {
    if models.is_empty() {
        return Err(LlmError::NoModels);
    }

    let mut attempted: Vec<String> = Vec::with_capacity(models.len());
    let mut failures = Vec::new();

    for model in models {
        attempted.push(model.clone());
        let request = ChatRequest::for_listing(model, listing);
        let start = Instant::now();

        match backend.complete(api_key, &request) {
            Ok(content) => {
                info!(
                    model = %model,
                    latency_ms = start.elapsed().as_millis() as u64,
                    "analysis.received"
                );
                let mut raw = parse_model_content(&content);
                if let Value::Object(map) = &mut raw {
                    map.insert("model_used".into(), json!(model));
                    map.insert("models_attempted".into(), json!(attempted));
                }
                return Ok(raw);
            }
            Err(e) => {
                warn!(model = %model, error = %e, "analysis.model_failed");
                failures.push(FailedAttempt {
                    model: model.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    Err(LlmError::all_failed(failures))
}

/// Turns message text into a JSON object. Code fences and chatter around the
/// object are tolerated; text with no object in it becomes `{"analysis": text}`.
pub fn parse_model_content(content: &str) -> Value {
    let text = strip_code_fence(content.trim());

    if let Some(obj) = parse_object(text) {
        return obj;
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Some(obj) = parse_object(&text[start..=end]) {
                return obj;
            }
        }
    }

    json!({ "analysis": text })
}

fn parse_object(text: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map(|(_, body)| body).unwrap_or("");
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
