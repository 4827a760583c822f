//! Income domain types.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{category::CategoryId, payment_method::PaymentMethodId, user::UserID};

/// Database identifier for an income record.
pub type IncomeId = i64;

/// A stored income record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// The record's ID in the application database.
    pub id: IncomeId,
    /// The user who recorded the income.
    pub user_id: UserID,
    /// The income category.
    pub category_id: CategoryId,
    /// The amount received. Always positive.
    pub amount: f64,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The date the income was received.
    pub date: Date,
    /// The payment method the income arrived through.
    pub payment_method_id: PaymentMethodId,
    /// The derived financial-year label, e.g. "2024".
    pub financial_year: String,
    /// The derived month label, e.g. "January".
    pub month: String,
}

/// The data needed to create an income record.
///
/// The financial-year and month labels are intentionally absent: they are
/// derived from `date` when the record is written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncome {
    /// The user recording the income.
    pub user_id: UserID,
    /// The income category.
    pub category_id: CategoryId,
    /// The amount received. Must be positive.
    pub amount: f64,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The date the income was received.
    pub date: Date,
    /// The payment method the income arrived through.
    pub payment_method_id: PaymentMethodId,
}

/// An income record joined with its category and payment-method names, as
/// returned by the list and report endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeDetails {
    /// The record's ID in the application database.
    pub id: IncomeId,
    /// The amount received.
    pub amount: f64,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The date the income was received.
    pub date: Date,
    /// The derived financial-year label.
    pub financial_year: String,
    /// The derived month label.
    pub month: String,
    /// The name of the income category.
    pub category_name: String,
    /// The name of the payment method.
    pub payment_method_name: String,
}
