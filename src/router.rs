use crate::analysis::normalize;
use crate::config::AppConfig;
use crate::domain::fixtures::{
    sample_analysis, sample_listing, ERROR_FALLBACK_MODEL_LABEL, NO_MODELS_ATTEMPTED,
    SAMPLE_MODEL_LABEL,
};
use crate::domain::{AnalysisReport, ListingInput};
use crate::errors::ServerError;
use crate::llm::{analyze_listing, ChatBackend, LlmError, OpenAiClient};
use crate::responses::html::html_response_with_status;
use crate::responses::{html_response, json_error_response, json_response, ResultResp};
use crate::spreadsheets::export_analysis_xlsx;
use crate::templates::pages::{home_page, results_page, HomeVm};
use astra::Request;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use tracing::{error, info, warn};

/// Listing descriptions are a few KB; the export form also carries the raw response.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

const MISSING_KEY_FORM: &str = "Please enter your OpenAI API key or use Sample Analysis mode";
const MISSING_KEY_API: &str = "OpenAI API key is required";

/// Shared by every worker thread.
pub struct AppState {
    pub config: AppConfig,
    pub backend: Box<dyn ChatBackend + Send + Sync>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, LlmError> {
        let client = OpenAiClient::new(config.openai_api_url.clone(), config.request_timeout)?;
        Ok(Self::with_backend(config, client))
    }

    pub fn with_backend(config: AppConfig, backend: impl ChatBackend + Send + Sync + 'static) -> Self {
        Self {
            config,
            backend: Box::new(backend),
        }
    }

    /// The submitted key, or the server's own when the submission is blank.
    fn api_key(&self, submitted: Option<&str>) -> Option<String> {
        submitted
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .or_else(|| self.config.openai_api_key.clone())
    }

    fn report(&self, listing: ListingInput, raw: Value) -> AnalysisReport {
        AnalysisReport::from_raw(
            listing,
            raw,
            &self.config.weights,
            self.config.highlight_threshold,
        )
    }
}

pub fn handle(mut req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    info!(method = %method, path = %path, "http.request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => {
            let query = parse_query(&req);
            let use_sample = query.get("sample").is_some_and(|v| v == "1");
            let listing = if use_sample {
                sample_listing()
            } else {
                ListingInput::default()
            };
            html_response(home_page(&HomeVm {
                listing,
                use_sample,
                server_key: state.config.openai_api_key.is_some(),
                error: None,
            }))
        }
        ("POST", "/analyze") => analyze_form(&mut req, state),
        ("POST", "/export") => export(&mut req, state),

        ("POST", "/api/analyze") => Ok(api_analyze(&mut req, state).unwrap_or_else(json_error_response)),
        (_, "/api/analyze") => Ok(json_error_response(ServerError::MethodNotAllowed)),
        ("POST", "/api/normalize") => {
            Ok(api_normalize(&mut req, state).unwrap_or_else(json_error_response))
        }
        (_, "/api/normalize") => Ok(json_error_response(ServerError::MethodNotAllowed)),

        _ => Err(ServerError::NotFound),
    }
}

fn analyze_form(req: &mut Request, state: &AppState) -> ResultResp {
    let form = read_form(req)?;
    let listing = ListingInput::from_form(&form);
    let use_sample = form.get("use_sample").is_some_and(|v| !v.is_empty());

    let form_error = |listing: ListingInput, message: String| {
        html_response_with_status(
            400,
            home_page(&HomeVm {
                listing,
                use_sample,
                server_key: state.config.openai_api_key.is_some(),
                error: Some(message),
            }),
        )
    };

    // Same order as the JSON route: key, then description.
    let api_key = if use_sample {
        None
    } else {
        match state.api_key(form.get("api_key").map(String::as_str)) {
            Some(key) => Some(key),
            None => return form_error(listing, MISSING_KEY_FORM.to_string()),
        }
    };

    if let Err(e) = listing.validate() {
        return form_error(listing, e.user_message());
    }

    let report = match api_key {
        None => {
            info!(listing = %listing.display_name(), "analysis.sample_mode");
            let raw = sample_analysis(SAMPLE_MODEL_LABEL, &[NO_MODELS_ATTEMPTED]);
            state.report(listing, raw)
        }
        Some(api_key) => {
            let models = &state.config.models;
            match analyze_listing(state.backend.as_ref(), models, &api_key, &listing) {
                Ok(raw) => state.report(listing, raw),
                Err(e) => {
                    error!(error = %e, "analysis.fallback_to_sample");
                    let raw = sample_analysis(
                        ERROR_FALLBACK_MODEL_LABEL,
                        &["Error occurred during API call"],
                    );
                    state
                        .report(listing, raw)
                        .with_notice(format!("{e}. Using sample analysis as fallback."))
                }
            }
        }
    };

    html_response(results_page(&report, state.config.highlight_threshold))
}

fn export(req: &mut Request, state: &AppState) -> ResultResp {
    let form = read_form(req)?;
    let raw: Value = form
        .get("raw")
        .and_then(|r| serde_json::from_str(r).ok())
        .ok_or_else(|| ServerError::BadRequest("Missing or invalid analysis data".into()))?;

    let report = state.report(ListingInput::from_form(&form), raw);
    export_analysis_xlsx(&report)
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    #[serde(default, rename = "apiKey")]
    api_key: Option<String>,
    #[serde(default)]
    property: ListingInput,
}

fn api_analyze(req: &mut Request, state: &AppState) -> ResultResp {
    let body: AnalyzeRequest = read_json(req)?;

    let api_key = state
        .api_key(body.api_key.as_deref())
        .ok_or_else(|| ServerError::BadRequest(MISSING_KEY_API.into()))?;
    body.property.validate()?;

    let raw = analyze_listing(
        state.backend.as_ref(),
        &state.config.models,
        &api_key,
        &body.property,
    )?;
    json_response(200, &raw)
}

fn api_normalize(req: &mut Request, state: &AppState) -> ResultResp {
    let raw: Value = read_json(req)?;
    json_response(200, &normalize(&raw, &state.config.weights))
}

/// Reads one byte past the limit so an oversized body is rejected, not truncated.
fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut bytes = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ServerError::BadRequest(format!("Could not read request body: {e}")))?;

    if bytes.len() as u64 > MAX_BODY_BYTES {
        warn!(limit = MAX_BODY_BYTES, "http.body_too_large");
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(bytes)
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let bytes = read_body(req)?;
    Ok(url::form_urlencoded::parse(&bytes).into_owned().collect())
}

fn read_json<T: serde::de::DeserializeOwned>(req: &mut Request) -> Result<T, ServerError> {
    let bytes = read_body(req)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ServerError::BadRequest(format!("Invalid JSON body: {e}")))
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
