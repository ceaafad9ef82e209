use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let body = error_page(status, &err.user_message()).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Same as [`error_to_response`] for the JSON API. Model failures carry
/// debug details so callers can see what was attempted.
pub fn json_error_response(err: ServerError) -> Response {
    let status = err.status();
    let payload = match &err {
        ServerError::Upstream(e) => json!({
            "error": true,
            "message": "API Error - Debug Information",
            "error_details": e.to_string(),
            "models_attempted": e.models_attempted(),
        }),
        other => json!({ "error": other.user_message() }),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(payload.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
