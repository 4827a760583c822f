//! Payment methods: the tender type recorded against every transaction
//! (cash, card, UPI, and so on).

use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error};

/// Database identifier for a payment method.
pub type PaymentMethodId = i64;

/// A tender type used for a transaction (e.g., 'Cash', 'UPI').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// The payment method's ID in the application database.
    pub id: PaymentMethodId,
    /// The payment method's name, unique across payment methods.
    pub name: String,
    /// An optional free-form description.
    pub description: Option<String>,
}

/// Create the payment method table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_payment_method_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS payment_method (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                description TEXT
                )",
        (),
    )?;

    Ok(())
}

/// Create a payment method and return it with its generated ID.
///
/// # Errors
///
/// Returns:
/// - [Error::EmptyName] if `name` is empty or only whitespace.
/// - [Error::DuplicateName] if a payment method named `name` already exists.
pub fn create_payment_method(
    name: &str,
    description: Option<String>,
    connection: &Connection,
) -> Result<PaymentMethod, Error> {
    let name = name.trim();

    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    connection.execute(
        "INSERT INTO payment_method (name, description) VALUES (?1, ?2)",
        (name, &description),
    )?;

    let id = connection.last_insert_rowid();

    Ok(PaymentMethod {
        id,
        name: name.to_owned(),
        description,
    })
}

/// Retrieve a single payment method by ID.
pub fn get_payment_method(
    payment_method_id: PaymentMethodId,
    connection: &Connection,
) -> Result<PaymentMethod, Error> {
    connection
        .prepare("SELECT id, name, description FROM payment_method WHERE id = :id")?
        .query_row(&[(":id", &payment_method_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all payment methods ordered alphabetically by name.
pub fn get_all_payment_methods(connection: &Connection) -> Result<Vec<PaymentMethod>, Error> {
    connection
        .prepare("SELECT id, name, description FROM payment_method ORDER BY name ASC")?
        .query_map([], map_row)?
        .map(|maybe_method| maybe_method.map_err(|error| error.into()))
        .collect()
}

fn map_row(row: &Row) -> Result<PaymentMethod, rusqlite::Error> {
    Ok(PaymentMethod {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

/// The fields the client submits to create a payment method.
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentMethodForm {
    /// The payment method name.
    pub name: String,
    /// An optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

/// A route handler for listing all payment methods.
pub async fn get_payment_methods_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<PaymentMethod>>, Error> {
    let connection = state.connection()?;

    Ok(Json(get_all_payment_methods(&connection)?))
}

/// A route handler for creating a payment method.
pub async fn create_payment_method_endpoint(
    State(state): State<AppState>,
    Json(form): Json<PaymentMethodForm>,
) -> Result<(StatusCode, Json<PaymentMethod>), Error> {
    let connection = state.connection()?;
    let method = create_payment_method(&form.name, form.description, &connection)?;

    Ok((StatusCode::CREATED, Json(method)))
}
