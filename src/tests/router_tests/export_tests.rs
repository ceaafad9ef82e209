use crate::domain::fixtures::{sample_analysis, NO_MODELS_ATTEMPTED, SAMPLE_MODEL_LABEL};
use crate::router::handle;
use crate::tests::utils::{body_bytes, post_form, test_state, StubBackend};

#[test]
fn export_returns_workbook_download() {
    let state = test_state(StubBackend::replying("{}"));
    let raw = sample_analysis(SAMPLE_MODEL_LABEL, &[NO_MODELS_ATTEMPTED]).to_string();
    let req = post_form(
        "/export",
        &[
            ("raw", raw.as_str()),
            ("name", "Retail Strip Center"),
            ("description", "Motivated seller."),
        ],
    );

    let resp = handle(req, &state).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    let disposition = resp.headers()["Content-Disposition"].to_str().unwrap().to_string();
    assert!(disposition.starts_with("attachment; filename=\"analysis_retail-strip-center_"));
    assert!(disposition.ends_with(".xlsx\""));
    assert_eq!(&body_bytes(resp)[..2], b"PK");
}

#[test]
fn export_without_analysis_is_bad_request() {
    let state = test_state(StubBackend::replying("{}"));
    let req = post_form("/export", &[("raw", "{broken"), ("name", "Lot")]);

    let err = handle(req, &state).unwrap_err();
    assert_eq!(err.status(), 400);
}
