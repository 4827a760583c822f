//! Per-user settings: financial-year boundaries and display currency.
//!
//! Settings are preferences only. The financial-year labels stored on
//! transactions are derived by [crate::period] with a fixed April start and
//! do not consume these boundaries.

use axum::{Extension, Json, extract::State};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, user::UserID};

/// The default first day of the financial year, as `MM-DD`.
pub const DEFAULT_FINANCIAL_YEAR_START: &str = "04-01";
/// The default last day of the financial year, as `MM-DD`.
pub const DEFAULT_FINANCIAL_YEAR_END: &str = "03-31";
/// The default display currency code.
pub const DEFAULT_CURRENCY: &str = "USD";

/// A user's settings. One row exists per registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// The user these settings belong to.
    pub user_id: UserID,
    /// The first day of the financial year, as `MM-DD`.
    pub financial_year_start: String,
    /// The last day of the financial year, as `MM-DD`.
    pub financial_year_end: String,
    /// The display currency code, e.g. "USD".
    pub currency: String,
}

impl UserSettings {
    /// The default settings for a newly registered user.
    pub fn default_for(user_id: UserID) -> Self {
        Self {
            user_id,
            financial_year_start: DEFAULT_FINANCIAL_YEAR_START.to_owned(),
            financial_year_end: DEFAULT_FINANCIAL_YEAR_END.to_owned(),
            currency: DEFAULT_CURRENCY.to_owned(),
        }
    }
}

/// Create the user settings table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_settings_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user_settings (
                user_id INTEGER PRIMARY KEY,
                financial_year_start TEXT NOT NULL,
                financial_year_end TEXT NOT NULL,
                currency TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

/// Get the settings for `user_id`.
///
/// # Errors
///
/// Returns [Error::NotFound] if the user has no settings row, or a
/// [Error::SqlError] if an SQL related error occurred.
pub fn get_settings(user_id: UserID, connection: &Connection) -> Result<UserSettings, Error> {
    connection
        .prepare(
            "SELECT user_id, financial_year_start, financial_year_end, currency
                FROM user_settings WHERE user_id = :user_id",
        )?
        .query_row(&[(":user_id", &user_id.as_i64())], |row| {
            Ok(UserSettings {
                user_id: UserID::new(row.get(0)?),
                financial_year_start: row.get(1)?,
                financial_year_end: row.get(2)?,
                currency: row.get(3)?,
            })
        })
        .map_err(|error| error.into())
}

/// Insert or replace the settings row for `settings.user_id`.
///
/// # Errors
///
/// Returns [Error::InvalidFinancialYearBoundary] if either boundary is not a
/// valid `MM-DD` string, or a [Error::SqlError] if an SQL related error
/// occurred.
pub fn upsert_settings(
    settings: &UserSettings,
    connection: &Connection,
) -> Result<UserSettings, Error> {
    validate_month_day(&settings.financial_year_start)?;
    validate_month_day(&settings.financial_year_end)?;

    connection.execute(
        "INSERT INTO user_settings (user_id, financial_year_start, financial_year_end, currency)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id) DO UPDATE SET
                financial_year_start = excluded.financial_year_start,
                financial_year_end = excluded.financial_year_end,
                currency = excluded.currency",
        (
            settings.user_id.as_i64(),
            &settings.financial_year_start,
            &settings.financial_year_end,
            &settings.currency,
        ),
    )?;

    Ok(settings.clone())
}

/// Create the default settings row for a newly registered user.
///
/// # Errors
///
/// Returns a [Error::SqlError] if an SQL related error occurred.
pub fn create_default_settings(
    user_id: UserID,
    connection: &Connection,
) -> Result<UserSettings, Error> {
    upsert_settings(&UserSettings::default_for(user_id), connection)
}

/// Check that `boundary` is a valid `MM-DD` string, e.g. "04-01".
fn validate_month_day(boundary: &str) -> Result<(), Error> {
    let parts: Vec<&str> = boundary.split('-').collect();

    let valid = match parts.as_slice() {
        [month, day] if month.len() == 2 && day.len() == 2 => {
            matches!(month.parse::<u8>(), Ok(1..=12)) && matches!(day.parse::<u8>(), Ok(1..=31))
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidFinancialYearBoundary(boundary.to_owned()))
    }
}

/// The settings fields the client may change.
#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsForm {
    /// The first day of the financial year, as `MM-DD`.
    pub financial_year_start: String,
    /// The last day of the financial year, as `MM-DD`.
    pub financial_year_end: String,
    /// The display currency code.
    pub currency: String,
}

/// A route handler for reading the authenticated user's settings.
///
/// A default settings row is created on the fly if none exists, so this
/// endpoint always succeeds for an authenticated user.
pub async fn get_user_settings(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
) -> Result<Json<UserSettings>, Error> {
    let connection = state.connection()?;

    let settings = match get_settings(user_id, &connection) {
        Ok(settings) => settings,
        Err(Error::NotFound) => create_default_settings(user_id, &connection)?,
        Err(error) => return Err(error),
    };

    Ok(Json(settings))
}

/// A route handler for updating the authenticated user's settings.
pub async fn put_user_settings(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Json(form): Json<SettingsForm>,
) -> Result<Json<UserSettings>, Error> {
    let settings = UserSettings {
        user_id,
        financial_year_start: form.financial_year_start,
        financial_year_end: form.financial_year_end,
        currency: form.currency,
    };

    let connection = state.connection()?;
    let settings = upsert_settings(&settings, &connection)?;

    Ok(Json(settings))
}
