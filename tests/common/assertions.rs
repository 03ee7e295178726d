//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a successful image with the given media type
pub fn assert_image(response: &TestResponse, content_type: &str) {
    assert_ok(response);
    assert_eq!(
        response.header("content-type"),
        Some(content_type),
        "Expected Content-Type: {content_type}"
    );
    assert!(
        response
            .header("content-disposition")
            .is_some_and(|v| v.starts_with("attachment; filename=")),
        "Expected attachment Content-Disposition, got {:?}",
        response.header("content-disposition")
    );
}

/// Assert response is the standard error body with the given status and
/// taxonomy name
pub fn assert_error(response: &TestResponse, status: StatusCode, error_name: &str) {
    assert_status(response, status);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["error_name"].as_str(),
        Some(error_name),
        "Expected error_name {error_name}, full response: {}",
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(
        json["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected non-empty message"
    );
}
