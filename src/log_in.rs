//! The endpoint for logging in a user with their email and password.

use axum::{Json, extract::State};
use axum_extra::extract::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    auth::set_auth_cookie,
    user::{UserProfile, get_user_by_email},
};

/// The email and password submitted by the client.
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    /// The email address the user registered with.
    pub email: String,
    /// The user's plain-text password.
    pub password: String,
}

/// A route handler for logging in a user.
///
/// On success the session cookies are set and the user's profile is returned.
///
/// # Errors
///
/// Returns [Error::InvalidCredentials] when the email is unknown or the
/// password does not match. The two cases are indistinguishable to the
/// client so that it cannot probe which email addresses are registered.
pub async fn post_log_in(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(PrivateCookieJar, Json<UserProfile>), Error> {
    let user = {
        let connection = state.connection()?;

        get_user_by_email(&credentials.email, &connection).map_err(|error| match error {
            Error::NotFound => Error::InvalidCredentials,
            error => error,
        })?
    };

    if !user.password_hash.verify(&credentials.password)? {
        return Err(Error::InvalidCredentials);
    }

    let jar = set_auth_cookie(jar, user.id, state.cookie_duration)?;

    Ok((jar, Json(user.into())))
}

#[cfg(test)]
mod log_in_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{AppState, build_router, user::UserProfile};

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "42").expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn register_test_user(server: &TestServer) -> UserProfile {
        let response = server
            .post("/api/users")
            .json(&json!({
                "email": "test@test.com",
                "password": "averystrongandlongpassword",
            }))
            .await;

        response.json::<UserProfile>()
    }

    #[tokio::test]
    async fn log_in_succeeds_with_valid_credentials() {
        let server = get_test_server();
        let registered_user = register_test_user(&server).await;

        let response = server
            .post("/api/log_in")
            .json(&json!({
                "email": "test@test.com",
                "password": "averystrongandlongpassword",
            }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<UserProfile>(), registered_user);
        assert!(
            !response.cookies().iter().collect::<Vec<_>>().is_empty(),
            "expected session cookies to be set on log in"
        );
    }

    #[tokio::test]
    async fn log_in_fails_with_wrong_password() {
        let server = get_test_server();
        register_test_user(&server).await;

        let response = server
            .post("/api/log_in")
            .json(&json!({
                "email": "test@test.com",
                "password": "nottherightpassword",
            }))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn log_in_fails_with_unknown_email() {
        let server = get_test_server();

        let response = server
            .post("/api/log_in")
            .json(&json!({
                "email": "nobody@test.com",
                "password": "averystrongandlongpassword",
            }))
            .await;

        response.assert_status_unauthorized();
    }
}
