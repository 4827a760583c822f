//! Database operations for expense records.

use rusqlite::{Connection, Row};
use time::Date;

use crate::{
    Error,
    category::{get_expense_category, get_expense_subcategory},
    expense::{Expense, ExpenseDetails, NewExpense},
    payment_method::get_payment_method,
    period::financial_period_for,
    user::UserID,
};

/// Initialize the expense table and indexes.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            user_id INTEGER NOT NULL,
            category_id INTEGER NOT NULL,
            subcategory_id INTEGER,
            amount REAL NOT NULL,
            description TEXT,
            date TEXT NOT NULL,
            payment_method_id INTEGER NOT NULL,
            financial_year TEXT NOT NULL,
            month TEXT NOT NULL,
            FOREIGN KEY(user_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY(category_id) REFERENCES expense_category(id) ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY(subcategory_id) REFERENCES expense_subcategory(id) ON UPDATE CASCADE ON DELETE CASCADE,
            FOREIGN KEY(payment_method_id) REFERENCES payment_method(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_expense_user_period
            ON expense(user_id, financial_year, month);",
    )?;

    Ok(())
}

/// Create a new expense record in the database.
///
/// The financial-year and month labels are derived from `new_expense.date`
/// here so that every write path stores the same labels for the same date.
///
/// # Errors
///
/// This function will return an error if:
/// - the amount is zero, negative, or not a finite number,
/// - `category_id` does not refer to a valid expense category,
/// - `subcategory_id` is set but does not refer to a valid subcategory,
/// - the subcategory's parent is a different category,
/// - `payment_method_id` does not refer to a valid payment method,
/// - or there is some other SQL error.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    if !new_expense.amount.is_finite() || new_expense.amount <= 0.0 {
        return Err(Error::InvalidAmount(new_expense.amount));
    }

    get_expense_category(new_expense.category_id, connection).map_err(|error| match error {
        // A 'not found' error does not make sense on an insert function,
        // so we instead indicate that the category id (a foreign key) is invalid.
        Error::NotFound => Error::InvalidCategory(new_expense.category_id),
        error => error,
    })?;

    if let Some(subcategory_id) = new_expense.subcategory_id {
        let subcategory =
            get_expense_subcategory(subcategory_id, connection).map_err(|error| match error {
                Error::NotFound => Error::InvalidSubcategory(subcategory_id),
                error => error,
            })?;

        if subcategory.category_id != new_expense.category_id {
            return Err(Error::SubcategoryMismatch {
                subcategory_id,
                category_id: new_expense.category_id,
            });
        }
    }

    get_payment_method(new_expense.payment_method_id, connection).map_err(|error| match error {
        Error::NotFound => Error::InvalidPaymentMethod(new_expense.payment_method_id),
        error => error,
    })?;

    let period = financial_period_for(new_expense.date);

    connection.execute(
        "INSERT INTO expense (user_id, category_id, subcategory_id, amount, description, date, payment_method_id, financial_year, month)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        (
            new_expense.user_id.as_i64(),
            new_expense.category_id,
            new_expense.subcategory_id,
            new_expense.amount,
            &new_expense.description,
            new_expense.date,
            new_expense.payment_method_id,
            &period.financial_year,
            &period.month,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        user_id: new_expense.user_id,
        category_id: new_expense.category_id,
        subcategory_id: new_expense.subcategory_id,
        amount: new_expense.amount,
        description: new_expense.description,
        date: new_expense.date,
        payment_method_id: new_expense.payment_method_id,
        financial_year: period.financial_year,
        month: period.month,
    })
}

const SELECT_EXPENSE_DETAILS: &str = "SELECT expense.id, expense.amount, expense.description, \
    expense.date, expense.financial_year, expense.month, expense_category.name, \
    expense_subcategory.name, payment_method.name \
    FROM expense \
    INNER JOIN expense_category ON expense.category_id = expense_category.id \
    LEFT JOIN expense_subcategory ON expense.subcategory_id = expense_subcategory.id \
    INNER JOIN payment_method ON expense.payment_method_id = payment_method.id";

/// Get the most recent expense records for `user_id`, newest first.
///
/// Records are sorted by date and then ID so that the order is stable for
/// records sharing a date.
///
/// # Errors
///
/// This function will return an error if there is an SQL error.
pub fn get_expenses_for_user(
    user_id: UserID,
    limit: u32,
    connection: &Connection,
) -> Result<Vec<ExpenseDetails>, Error> {
    let query = format!(
        "{SELECT_EXPENSE_DETAILS} WHERE expense.user_id = ?1 \
            ORDER BY expense.date DESC, expense.id DESC LIMIT ?2"
    );

    connection
        .prepare(&query)?
        .query_map((user_id.as_i64(), limit), map_details_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Get the expense records for `user_id` dated within `start` to `end`
/// (inclusive), newest first.
///
/// # Errors
///
/// This function will return an error if there is an SQL error.
pub fn get_expenses_in_range(
    user_id: UserID,
    start: Date,
    end: Date,
    connection: &Connection,
) -> Result<Vec<ExpenseDetails>, Error> {
    let query = format!(
        "{SELECT_EXPENSE_DETAILS} WHERE expense.user_id = ?1 AND expense.date BETWEEN ?2 AND ?3 \
            ORDER BY expense.date DESC, expense.id DESC"
    );

    connection
        .prepare(&query)?
        .query_map((user_id.as_i64(), start, end), map_details_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

fn map_details_row(row: &Row) -> Result<ExpenseDetails, rusqlite::Error> {
    Ok(ExpenseDetails {
        id: row.get(0)?,
        amount: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        financial_year: row.get(4)?,
        month: row.get(5)?,
        category_name: row.get(6)?,
        subcategory_name: row.get(7)?,
        payment_method_name: row.get(8)?,
    })
}
