//! Expense records: money leaving the household.
//!
//! Expenses carry an optional subcategory whose parent must match the
//! expense's category. As with income, the financial-year and month labels
//! are derived from the transaction date at write time.

mod db;
mod endpoints;
mod models;

pub use db::{create_expense, create_expense_table, get_expenses_for_user, get_expenses_in_range};
pub use endpoints::{
    ExpenseForm, create_expense_endpoint, get_expense_report_endpoint, get_expenses_endpoint,
};
pub use models::{Expense, ExpenseDetails, ExpenseId, NewExpense};
