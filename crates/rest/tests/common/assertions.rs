//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}: {}",
        expected,
        actual,
        response.text()
    );
}

/// Asserts that the response carries the API error body with `message`.
pub fn assert_error(response: &TestResponse, expected_status: u16, message: &str) {
    assert_status(response, expected_status);
    let body: Value = response.json();
    assert_eq!(body["error"], message, "Unexpected error body: {}", body);
}

/// Asserts that the response carries an error body mentioning `fragment`.
pub fn assert_error_contains(response: &TestResponse, expected_status: u16, fragment: &str) {
    assert_status(response, expected_status);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap_or_default();
    assert!(
        message.contains(fragment),
        "Expected error containing '{}', got '{}'",
        fragment,
        message
    );
}

/// Asserts that the response is `{"status": expected}`.
pub fn assert_ack(response: &TestResponse, expected_status: u16, status: &str) {
    assert_status(response, expected_status);
    let body: Value = response.json();
    assert_eq!(body["status"], status);
}
