//! Response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Parses the `X-Pagination` header, panicking if it is missing.
pub fn pagination(response: &TestResponse) -> Value {
    let header = response
        .headers()
        .get("x-pagination")
        .expect("X-Pagination header missing");
    serde_json::from_str(header.to_str().expect("X-Pagination is not ASCII"))
        .expect("X-Pagination is not JSON")
}

/// Asserts the response carries no `X-Pagination` header.
pub fn assert_no_pagination(response: &TestResponse) {
    assert!(
        response.headers().get("x-pagination").is_none(),
        "unexpected X-Pagination header"
    );
}

/// The keys of a JSON object, in order.
pub fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect()
}

/// The `rel` of every link in a `links` array.
pub fn rels(links: &Value) -> Vec<&str> {
    links
        .as_array()
        .expect("expected a links array")
        .iter()
        .map(|link| link["rel"].as_str().expect("link without rel"))
        .collect()
}

/// Asserts an error body has the given status and code.
pub fn assert_problem(body: &Value, status: u16, code: &str) {
    assert_eq!(body["status"], status, "body: {body}");
    assert_eq!(body["code"], code, "body: {body}");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
}
