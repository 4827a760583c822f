//! The endpoint for logging out the current user.

use axum::{Json, http::StatusCode};
use axum_extra::extract::PrivateCookieJar;
use serde_json::{Value, json};

use crate::auth::invalidate_auth_cookie;

/// A route handler that logs out the current user by invalidating their
/// session cookies.
///
/// Logging out an already logged-out client succeeds and is a no-op.
pub async fn post_log_out(jar: PrivateCookieJar) -> (StatusCode, PrivateCookieJar, Json<Value>) {
    (
        StatusCode::OK,
        invalidate_auth_cookie(jar),
        Json(json!({ "message": "logged out" })),
    )
}
