//! Cookie-based session authentication for the REST API.
//!
//! A successful log-in stores the user's ID in a signed and encrypted
//! private cookie with a sliding expiry. The [auth_guard] middleware
//! validates the cookie on every protected route and makes the user ID
//! available to handlers as a request extension.

mod cookie;
mod middleware;

pub(crate) use cookie::{
    DEFAULT_COOKIE_DURATION, extend_auth_cookie_duration_if_needed, get_user_id_from_cookies,
    invalidate_auth_cookie, set_auth_cookie,
};
pub(crate) use middleware::{AuthState, auth_guard};

#[cfg(test)]
pub(crate) use cookie::COOKIE_USER_ID;
