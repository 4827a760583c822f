//! Derives the financial-year and month labels stored on every transaction.
//!
//! The financial year runs April through March: a date in April or later
//! belongs to the financial year starting that calendar year, while January
//! through March belong to the financial year started the previous calendar
//! year. Both write paths (income and expense) go through [financial_period_for]
//! so that the dashboard can group the two tables consistently.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// The financial-year and month labels for a transaction date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialPeriod {
    /// The calendar year in which the financial year starts, e.g. "2024" for
    /// the year running 2024-04-01 through 2025-03-31.
    pub financial_year: String,
    /// The full English month name, e.g. "January".
    pub month: String,
}

/// The first month of the financial year.
const FINANCIAL_YEAR_START: Month = Month::April;

/// Derive the financial-year and month labels for a transaction dated `date`.
///
/// These labels are derived at write time and never supplied by the client.
pub fn financial_period_for(date: Date) -> FinancialPeriod {
    let financial_year = if date.month() as u8 >= FINANCIAL_YEAR_START as u8 {
        date.year()
    } else {
        date.year() - 1
    };

    FinancialPeriod {
        financial_year: financial_year.to_string(),
        month: month_name(date.month()),
    }
}

/// The full English name of `month`, e.g. "January".
pub fn month_name(month: Month) -> String {
    month.to_string()
}
