use crate::router::handle;
use crate::tests::utils::{body_string, post_form, test_state, StubBackend};

const DESCRIPTION: &str = "Owner is relocating and must sell. Deferred maintenance throughout.";

#[test]
fn missing_description_shows_inline_error() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_form(
        "/analyze",
        &[("api_key", "sk-test"), ("name", "Corner Lot"), ("description", "   ")],
    );

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Property description is required"));
    assert!(body.contains(r#"value="Corner Lot""#));
}

#[test]
fn missing_key_without_sample_mode_asks_for_one() {
    let backend = StubBackend::replying("{}");
    let state = test_state(backend.clone());
    let req = post_form("/analyze", &[("description", DESCRIPTION)]);

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 400);
    assert!(body_string(resp)
        .contains("Please enter your OpenAI API key or use Sample Analysis mode"));
    assert!(backend.asked().is_empty());
}

#[test]
fn sample_mode_skips_the_model() {
    let backend = StubBackend::replying("{}");
    let state = test_state(backend.clone());
    let req = post_form(
        "/analyze",
        &[
            ("use_sample", "on"),
            ("name", "Retail Strip Center"),
            ("description", DESCRIPTION),
        ],
    );

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Retail Strip Center"));
    assert!(body.contains("Sample Analysis"));
    assert!(body.contains("No models attempted"));
    assert!(body.contains("TOTAL SCORE"));
    assert!(body.contains("7.4"));
    assert!(body.contains("motivated seller"));
    assert!(body.contains("Investment Recommendation"));
    assert!(backend.asked().is_empty());
}

#[test]
fn model_reply_is_normalized_onto_results_page() {
    let reply = r#"{
        "scores": {"sellerMotivation": 9, "transactionComplexity": 3, "propertyCharacteristics": 6},
        "analysis": "Seller motivation is extreme. The building needs work."
    }"#;
    let backend = StubBackend::replying(reply);
    let state = test_state(backend.clone());
    let req = post_form(
        "/analyze",
        &[("api_key", "sk-test"), ("description", DESCRIPTION)],
    );

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("AI Model Used: "));
    assert!(body.contains("Seller motivation is extreme."));
    assert!(body.contains("No relevant keywords detected for this category."));
    assert_eq!(backend.asked(), vec!["o1"]);
}

#[test]
fn failed_cascade_falls_back_to_sample() {
    let backend = StubBackend::failing(401, "Incorrect API key provided");
    let state = test_state(backend.clone());
    let req = post_form(
        "/analyze",
        &[("api_key", "sk-bad"), ("description", DESCRIPTION)],
    );

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Sample Analysis (Error Fallback)"));
    assert!(body.contains("Error occurred during API call"));
    assert!(body.contains("Incorrect API key provided"));
    assert!(body.contains("Using sample analysis as fallback."));
    assert_eq!(backend.asked(), vec!["o1", "gpt-3.5-turbo"]);
}

#[test]
fn api_key_is_checked_before_description() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_form("/analyze", &[("name", "Corner Lot"), ("description", "")]);

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 400);
    let body = body_string(resp);
    assert!(body.contains("Please enter your OpenAI API key or use Sample Analysis mode"));
    assert!(!body.contains("Property description is required"));
}

#[test]
fn oversized_form_is_rejected_not_truncated() {
    let backend = StubBackend::replying("{}");
    let state = test_state(backend.clone());
    let description = format!("{}TAILMARK", "x".repeat(1_100_000));
    let req = post_form(
        "/analyze",
        &[("api_key", "sk-test"), ("description", description.as_str())],
    );

    let err = handle(req, &state).unwrap_err();

    assert_eq!(err.status(), 413);
    assert_eq!(err.user_message(), "Request body too large");
    assert!(backend.asked().is_empty());
}
