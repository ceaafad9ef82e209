use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, test_state, StubBackend};

#[test]
fn home_page_renders_form() {
    let state = test_state(StubBackend::replying("{}"));
    let resp = handle(get("/"), &state).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Property Analysis"));
    assert!(body.contains(r#"action="/analyze""#));
    assert!(body.contains(r#"name="description""#));
    assert!(body.contains("Load sample listing"));
    assert!(!body.contains("Retail Strip Center in Prime Location"));
}

#[test]
fn sample_query_prefills_listing() {
    let state = test_state(StubBackend::replying("{}"));
    let resp = handle(get("/?sample=1"), &state).unwrap();

    let body = body_string(resp);
    assert!(body.contains("Retail Strip Center in Prime Location"));
    assert!(body.contains(r#"value="$3,950,000""#));
}

#[test]
fn unknown_route_is_not_found() {
    let state = test_state(StubBackend::replying("{}"));
    let err = handle(get("/nope"), &state).unwrap_err();
    assert_eq!(err.status(), 404);

    let err = handle(post_form("/", &[]), &state).unwrap_err();
    assert_eq!(err.status(), 404);
}
