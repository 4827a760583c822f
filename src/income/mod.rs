//! Income records: money coming into the household.
//!
//! The financial-year and month labels on every record are derived from the
//! transaction date at write time, never supplied by the client.

mod db;
mod endpoints;
mod models;

pub use db::{create_income, create_income_table, get_income_for_user, get_income_in_range};
pub use endpoints::{
    IncomeForm, ListParams, ReportParams, create_income_endpoint, get_income_endpoint,
    get_income_report_endpoint,
};
pub use models::{Income, IncomeDetails, IncomeId, NewIncome};
