//! Database query helpers for the dashboard summary.

use rusqlite::Connection;

use crate::{Error, user::UserID};

/// Get the amount of every income record matching the (user, month,
/// financial-year) triple.
///
/// # Errors
///
/// Returns [Error::SqlError] if the query fails.
pub(super) fn get_income_amounts(
    user_id: UserID,
    month: &str,
    financial_year: &str,
    connection: &Connection,
) -> Result<Vec<f64>, Error> {
    connection
        .prepare(
            "SELECT amount FROM income
                WHERE user_id = ?1 AND month = ?2 AND financial_year = ?3",
        )?
        .query_map((user_id.as_i64(), month, financial_year), |row| row.get(0))?
        .map(|maybe_amount| maybe_amount.map_err(|error| error.into()))
        .collect()
}

/// Get one `(category name, amount)` pair for every expense record matching
/// the (user, month, financial-year) triple.
///
/// # Errors
///
/// Returns [Error::SqlError] if the query fails.
pub(super) fn get_expense_amounts_by_category(
    user_id: UserID,
    month: &str,
    financial_year: &str,
    connection: &Connection,
) -> Result<Vec<(String, f64)>, Error> {
    connection
        .prepare(
            "SELECT expense_category.name, expense.amount FROM expense
                INNER JOIN expense_category ON expense.category_id = expense_category.id
                WHERE expense.user_id = ?1 AND expense.month = ?2 AND expense.financial_year = ?3",
        )?
        .query_map((user_id.as_i64(), month, financial_year), |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?
        .map(|maybe_row| maybe_row.map_err(|error| error.into()))
        .collect()
}
