//! Database operations for income records.

use rusqlite::{Connection, Row};
use time::Date;

use crate::{
    Error,
    category::get_income_category,
    income::{Income, IncomeDetails, NewIncome},
    payment_method::get_payment_method,
    period::financial_period_for,
    user::UserID,
};

/// Initialize the income table and indexes.
pub fn create_income_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS income (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            category_id INTEGER NOT NULL,
            amount REAL NOT NULL,
            description TEXT,
            date TEXT NOT NULL,
            payment_method_id INTEGER NOT NULL,
            financial_year TEXT NOT NULL,
            month TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY(category_id) REFERENCES income_category(id) ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY(payment_method_id) REFERENCES payment_method(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_income_user_period
            ON income(user_id, financial_year, month);",
    )?;

    Ok(())
}

/// Create a new income record in the database.
///
/// The financial-year and month labels are derived from `new_income.date`
/// here so that every write path stores the same labels for the same date.
///
/// # Errors
///
/// This function will return an error if:
/// - the amount is zero, negative, or not a finite number,
/// - `category_id` does not refer to a valid income category,
/// - `payment_method_id` does not refer to a valid payment method,
/// - or there is some other SQL error.
pub fn create_income(new_income: NewIncome, connection: &Connection) -> Result<Income, Error> {
    if !new_income.amount.is_finite() || new_income.amount <= 0.0 {
        return Err(Error::InvalidAmount(new_income.amount));
    }

    get_income_category(new_income.category_id, connection).map_err(|error| match error {
        // A 'not found' error does not make sense on an insert function,
        // so we instead indicate that the category id (a foreign key) is invalid.
        Error::NotFound => Error::InvalidCategory(new_income.category_id),
        error => error,
    })?;

    get_payment_method(new_income.payment_method_id, connection).map_err(|error| match error {
        Error::NotFound => Error::InvalidPaymentMethod(new_income.payment_method_id),
        error => error,
    })?;

    let period = financial_period_for(new_income.date);

    connection.execute(
        "INSERT INTO income (user_id, category_id, amount, description, date, payment_method_id, financial_year, month)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            new_income.user_id.as_i64(),
            new_income.category_id,
            new_income.amount,
            &new_income.description,
            new_income.date,
            new_income.payment_method_id,
            &period.financial_year,
            &period.month,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Income {
        id,
        user_id: new_income.user_id,
        category_id: new_income.category_id,
        amount: new_income.amount,
        description: new_income.description,
        date: new_income.date,
        payment_method_id: new_income.payment_method_id,
        financial_year: period.financial_year,
        month: period.month,
    })
}

const SELECT_INCOME_DETAILS: &str = "SELECT income.id, income.amount, income.description, \
    income.date, income.financial_year, income.month, income_category.name, payment_method.name \
    FROM income \
    INNER JOIN income_category ON income.category_id = income_category.id \
    INNER JOIN payment_method ON income.payment_method_id = payment_method.id";

/// Get the most recent income records for `user_id`, newest first.
///
/// Records are sorted by date and then ID so that the order is stable for
/// records sharing a date.
///
/// # Errors
///
/// This function will return an error if there is an SQL error.
pub fn get_income_for_user(
    user_id: UserID,
    limit: u32,
    connection: &Connection,
) -> Result<Vec<IncomeDetails>, Error> {
    let query = format!(
        "{SELECT_INCOME_DETAILS} WHERE income.user_id = ?1 \
            ORDER BY income.date DESC, income.id DESC LIMIT ?2"
    );

    connection
        .prepare(&query)?
        .query_map((user_id.as_i64(), limit), map_details_row)?
        .map(|maybe_income| maybe_income.map_err(|error| error.into()))
        .collect()
}

/// Get the income records for `user_id` dated within `start` to `end`
/// (inclusive), newest first.
///
/// # Errors
///
/// This function will return an error if there is an SQL error.
pub fn get_income_in_range(
    user_id: UserID,
    start: Date,
    end: Date,
    connection: &Connection,
) -> Result<Vec<IncomeDetails>, Error> {
    let query = format!(
        "{SELECT_INCOME_DETAILS} WHERE income.user_id = ?1 AND income.date BETWEEN ?2 AND ?3 \
            ORDER BY income.date DESC, income.id DESC"
    );

    connection
        .prepare(&query)?
        .query_map((user_id.as_i64(), start, end), map_details_row)?
        .map(|maybe_income| maybe_income.map_err(|error| error.into()))
        .collect()
}

fn map_details_row(row: &Row) -> Result<IncomeDetails, rusqlite::Error> {
    Ok(IncomeDetails {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        financial_year: row.get(4)?,
        month: row.get(5)?,
        category_name: row.get(6)?,
        payment_method_name: row.get(7)?,
    })
}
