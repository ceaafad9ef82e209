use crate::router::handle;
use crate::tests::utils::{body_json, get, post_json, post_raw, test_state, StubBackend};
use serde_json::json;

fn property() -> serde_json::Value {
    json!({
        "name": "Office Park",
        "propertyType": "Office",
        "location": "Austin, TX",
        "price": "$12,000,000",
        "description": "Motivated seller, below market rents."
    })
}

#[test]
fn non_post_is_method_not_allowed() {
    let state = test_state(StubBackend::replying("{}"));
    let resp = handle(get("/api/analyze"), &state).unwrap();

    assert_eq!(resp.status(), 405);
    assert_eq!(body_json(resp), json!({ "error": "Method not allowed" }));
}

#[test]
fn missing_key_is_bad_request() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_json("/api/analyze", &json!({ "property": property() }));

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp), json!({ "error": "OpenAI API key is required" }));
}

#[test]
fn server_key_is_used_when_request_has_none() {
    let mut state = test_state(StubBackend::replying(r#"{"total_score": 5}"#));
    state.config.openai_api_key = Some("sk-server".into());
    let req = post_json("/api/analyze", &json!({ "apiKey": "", "property": property() }));

    let resp = handle(req, &state).unwrap();
    assert_eq!(resp.status(), 200);
}

#[test]
fn missing_description_is_bad_request() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_json(
        "/api/analyze",
        &json!({ "apiKey": "sk-test", "property": { "name": "Lot" } }),
    );

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 400);
    assert_eq!(body_json(resp), json!({ "error": "Property description is required" }));
}

#[test]
fn success_returns_tagged_model_json() {
    let backend = StubBackend::replying(
        "```json\n{\"seller_motivation_score\": 8, \"summary\": \"Worth a call.\"}\n```",
    );
    let state = test_state(backend);
    let req = post_json("/api/analyze", &json!({ "apiKey": "sk-test", "property": property() }));

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    assert_eq!(body["seller_motivation_score"], 8);
    assert_eq!(body["summary"], "Worth a call.");
    assert_eq!(body["model_used"], "o1");
    assert_eq!(body["models_attempted"], json!(["o1"]));
}

#[test]
fn cascade_failure_returns_debug_json() {
    let state = test_state(StubBackend::failing(404, "model not found"));
    let req = post_json("/api/analyze", &json!({ "apiKey": "sk-test", "property": property() }));

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 500);
    let body = body_json(resp);
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "API Error - Debug Information");
    assert_eq!(body["models_attempted"], json!(["o1", "gpt-3.5-turbo"]));
    let details = body["error_details"].as_str().unwrap();
    assert!(details.contains("o1 error: API error: 404 - model not found"));
}

#[test]
fn unparseable_body_is_bad_request() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_raw("/api/analyze", "{not json");

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 400);
    let message = body_json(resp)["error"].as_str().unwrap().to_string();
    assert!(message.starts_with("Invalid JSON body"));
}

#[test]
fn normalize_accepts_plain_prose() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_json("/api/normalize", &json!("Seller motivation: very high. Nothing else."));

    let body = body_json(handle(req, &state).unwrap());

    assert_eq!(body["seller_motivation"]["explanation"], "very high.");
    assert_eq!(body["total_score"], 0.0);
}

#[test]
fn normalize_endpoint_returns_canonical_shape() {
    let state = test_state(StubBackend::replying("{}"));
    let raw = json!({
        "seller_motivation_score": 8,
        "transaction_complexity_score": 6,
        "property_characteristics_score": 7,
        "seller_motivation_analysis": { "explanation": "Urgent sale.", "keywords": [] },
        "analysis": "Owner is relocating and must sell."
    });

    let resp = handle(post_json("/api/normalize", &raw), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_json(resp);
    assert_eq!(body["seller_motivation"]["score"], 8.0);
    assert_eq!(body["seller_motivation"]["explanation"], "Urgent sale.");
    assert_eq!(body["total_score"], 7.1);
    assert!(body["transaction_complexity"]["keywords"].is_array());
}

#[test]
fn oversized_json_body_is_payload_too_large() {
    let state = test_state(StubBackend::replying("{}"));
    let mut listing = property();
    listing["description"] = json!("y".repeat(1_100_000));
    let req = post_json("/api/analyze", &json!({ "apiKey": "sk-test", "property": listing }));

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 413);
    assert_eq!(body_json(resp), json!({ "error": "Request body too large" }));
}
