//! Middleware for logging requests and responses.

use axum::{extract::Request, http::header::CONTENT_TYPE, middleware::Next, response::Response};
use serde_json::Value;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and logged in full at the `debug` level. Password fields in
/// JSON request bodies are redacted.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (headers, body_text) = extract_header_and_body_text_from_request(request).await;

    let is_json = headers.headers.get(CONTENT_TYPE)
        == Some(&"application/json".parse().expect("valid header value"));
    if is_json {
        log_request(&headers, &redact_password_fields(&body_text));
    } else {
        log_request(&headers, &body_text);
    }

    let request = Request::from_parts(headers, body_text.into());
    let response = next.run(request).await;

    let (headers, body_text) = extract_header_and_body_text_from_response(response).await;
    log_response(&headers, &body_text);

    Response::from_parts(headers, body_text.into())
}

/// The names of JSON fields whose values must never reach the logs.
const REDACTED_FIELDS: [&str; 2] = ["password", "confirm_password"];

/// Replace password values in a JSON object with asterisks.
///
/// Bodies that do not parse as a JSON object are returned unchanged; they
/// will be rejected by the handler's extractor anyway.
fn redact_password_fields(body_text: &str) -> String {
    let Ok(Value::Object(mut body)) = serde_json::from_str(body_text) else {
        return body_text.to_string();
    };

    for field in REDACTED_FIELDS {
        if let Some(value) = body.get_mut(field) {
            *value = Value::String("********".to_owned());
        }
    }

    Value::Object(body).to_string()
}

async fn extract_header_and_body_text_from_request(
    request: Request,
) -> (axum::http::request::Parts, String) {
    let (headers, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    (headers, String::from_utf8_lossy(&body_bytes).to_string())
}

async fn extract_header_and_body_text_from_response(
    response: Response,
) -> (axum::http::response::Parts, String) {
    let (headers, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();

    (headers, String::from_utf8_lossy(&body_bytes).to_string())
}

/// The maximum body length logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

fn log_request(headers: &axum::http::request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {headers:#?}\nbody: {:}...",
            &body[..LOG_BODY_LENGTH_LIMIT]
        );
        tracing::debug!("Full request body: {body:?}");
    } else {
        tracing::info!("Received request: {headers:#?}\nbody: {body:?}");
    }
}

fn log_response(headers: &axum::http::response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {headers:#?}\nbody: {:}...",
            &body[..LOG_BODY_LENGTH_LIMIT]
        );
        tracing::debug!("Full response body: {body:?}");
    } else {
        tracing::info!("Sending response: {headers:#?}\nbody: {body:?}");
    }
}

#[cfg(test)]
mod redaction_tests {
    use super::redact_password_fields;

    #[test]
    fn password_fields_are_redacted() {
        let body = r#"{"email":"foo@bar.baz","password":"hunter2"}"#;

        let redacted = redact_password_fields(body);

        assert!(!redacted.contains("hunter2"));
        assert!(redacted.contains("foo@bar.baz"));
        assert!(redacted.contains("********"));
    }

    #[test]
    fn non_json_bodies_are_unchanged() {
        let body = "password=hunter2";

        assert_eq!(redact_password_fields(body), body);
    }

    #[test]
    fn bodies_without_password_fields_are_preserved() {
        let body = r#"{"name":"Salary"}"#;

        let redacted = redact_password_fields(body);

        assert!(redacted.contains("Salary"));
    }
}
