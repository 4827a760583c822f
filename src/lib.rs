//! Hisab is a household finance tracker for recording income and expenses,
//! organising them into categories, and reviewing monthly summaries.
//!
//! This library provides a JSON REST API backed by SQLite.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

pub mod category;
pub mod dashboard;
pub mod db;
pub mod endpoints;
pub mod expense;
pub mod income;
pub mod password;
pub mod payment_method;
pub mod period;
pub mod settings;
pub mod user;

mod app_state;
mod auth;
mod log_in;
mod log_out;
mod logging;
mod register_user;
mod routing;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    category::{CategoryId, SubcategoryId},
    payment_method::PaymentMethodId,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user provided an email/password combination that does not match a
    /// registered user.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Either the session or expiry cookie is missing from the cookie jar in
    /// the request.
    #[error("no session cookies in the request")]
    CookieMissing,

    /// There was an error parsing the date in the cookie or creating the new
    /// expiry date time.
    ///
    /// Callers should pass in the original error as a string and the date
    /// string that caused the error.
    #[error("could not format expiry cookie date-time string \"{1}\": {0}")]
    InvalidDateFormat(String, String),

    /// The user provided a password that is too easy to guess.
    #[error("password is too weak: {0}")]
    TooWeak(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The string used to register a user could not be parsed as an email
    /// address.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    /// The email address used to register a user already belongs to another
    /// user.
    #[error("a user with that email address already exists")]
    DuplicateEmail,

    /// A category or payment method was created with a name that is already
    /// taken.
    #[error("that name is already in use")]
    DuplicateName,

    /// An empty string was used to create a category or payment method name.
    #[error("name cannot be empty")]
    EmptyName,

    /// A transaction was created with an amount that is zero, negative, or
    /// not a finite number.
    #[error("{0} is not a valid amount, amounts must be positive")]
    InvalidAmount(f64),

    /// The category ID used to create a transaction did not match an
    /// existing category.
    #[error("the category ID {0} does not refer to a valid category")]
    InvalidCategory(CategoryId),

    /// The subcategory ID used to create an expense did not match an
    /// existing subcategory.
    #[error("the subcategory ID {0} does not refer to a valid subcategory")]
    InvalidSubcategory(SubcategoryId),

    /// The subcategory used to create an expense belongs to a different
    /// category than the one on the expense.
    #[error("subcategory {subcategory_id} does not belong to category {category_id}")]
    SubcategoryMismatch {
        /// The subcategory the client sent.
        subcategory_id: SubcategoryId,
        /// The category the client sent, which is not the subcategory's parent.
        category_id: CategoryId,
    },

    /// The payment method ID used to create a transaction did not match an
    /// existing payment method.
    #[error("the payment method ID {0} does not refer to a valid payment method")]
    InvalidPaymentMethod(PaymentMethodId),

    /// A financial year boundary was not a valid `MM-DD` string.
    #[error("\"{0}\" is not a valid financial year boundary, expected MM-DD")]
    InvalidFinancialYearBoundary(String),

    /// A report was requested without both ends of the date range.
    #[error("start_date and end_date are required")]
    MissingDateRange,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with("user.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with(".name") =>
            {
                Error::DuplicateName
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidCredentials | Error::CookieMissing => StatusCode::UNAUTHORIZED,
            Error::TooWeak(_)
            | Error::InvalidEmail(_)
            | Error::EmptyName
            | Error::InvalidAmount(_)
            | Error::InvalidCategory(_)
            | Error::InvalidSubcategory(_)
            | Error::SubcategoryMismatch { .. }
            | Error::InvalidPaymentMethod(_)
            | Error::InvalidFinancialYearBoundary(_)
            | Error::MissingDateRange => StatusCode::BAD_REQUEST,
            Error::DuplicateEmail | Error::DuplicateName => StatusCode::CONFLICT,
            Error::NotFound => StatusCode::NOT_FOUND,
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                let body = Json(json!({ "error": "internal server error" }));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn query_returned_no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response = Error::InvalidAmount(-1.5).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn auth_errors_map_to_unauthorized() {
        let response = Error::InvalidCredentials.into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn unexpected_errors_map_to_internal_server_error() {
        let response = Error::DatabaseLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
