use axum::{body::Body, http::StatusCode, response::Response};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[track_caller]
pub(crate) fn assert_content_type(response: &Response<Body>, content_type: &str) {
    let content_type_header = response
        .headers()
        .get("content-type")
        .expect("content-type header missing");
    assert_eq!(content_type_header, content_type);
}

pub(crate) async fn parse_json_body<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not read response body");

    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

/// Check that `response` is an error response with the status `status` and
/// the error message `message`.
pub(crate) async fn assert_error_body(response: Response<Body>, status: StatusCode, message: &str) {
    assert_eq!(response.status(), status);
    assert_content_type(&response, "application/json");

    let body: Value = parse_json_body(response).await;
    assert_eq!(body, json!({ "error": message }));
}
