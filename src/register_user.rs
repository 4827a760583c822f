//! The endpoint for registering a new user.

use std::str::FromStr;

use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::PrivateCookieJar;
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    auth::set_auth_cookie,
    password::PasswordHash,
    settings::create_default_settings,
    user::{UserProfile, create_user},
};

/// The details submitted by the client to create an account.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterForm {
    /// The email address to register with. Must not belong to an existing user.
    pub email: String,
    /// The plain-text password. Weak passwords are rejected.
    pub password: String,
}

/// A route handler for creating a new user.
///
/// The new user gets a default settings row and is logged in immediately, so
/// the client does not need a follow-up log-in request.
///
/// # Errors
///
/// Returns:
/// - [Error::InvalidEmail] if the email address cannot be parsed.
/// - [Error::TooWeak] if the password is too easy to guess.
/// - [Error::DuplicateEmail] if the email belongs to an existing user.
pub async fn register_user(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Json(form): Json<RegisterForm>,
) -> Result<(StatusCode, PrivateCookieJar, Json<UserProfile>), Error> {
    let email = EmailAddress::from_str(&form.email)
        .map_err(|error| Error::InvalidEmail(error.to_string()))?;
    let password_hash = PasswordHash::from_raw_password(&form.password, PasswordHash::DEFAULT_COST)?;

    let user = {
        let connection = state.connection()?;
        let user = create_user(email, password_hash, &connection)?;
        create_default_settings(user.id, &connection)?;

        user
    };

    let jar = set_auth_cookie(jar, user.id, state.cookie_duration)?;

    Ok((StatusCode::CREATED, jar, Json(user.into())))
}
