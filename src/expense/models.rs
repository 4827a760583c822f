//! Expense domain types.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    category::{CategoryId, SubcategoryId},
    payment_method::PaymentMethodId,
    user::UserID,
};

/// Database identifier for an expense record.
pub type ExpenseId = i64;

/// A stored expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The record's ID in the application database.
    pub id: ExpenseId,
    /// The user who recorded the expense.
    pub user_id: UserID,
    /// The expense category.
    pub category_id: CategoryId,
    /// The subcategory within the category, if any.
    pub subcategory_id: Option<SubcategoryId>,
    /// The amount spent. Always positive.
    pub amount: f64,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The date of the expense.
    pub date: Date,
    /// The payment method used.
    pub payment_method_id: PaymentMethodId,
    /// The derived financial-year label, e.g. "2024".
    pub financial_year: String,
    /// The derived month label, e.g. "January".
    pub month: String,
}

/// The data needed to create an expense record.
///
/// The financial-year and month labels are intentionally absent: they are
/// derived from `date` when the record is written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    /// The user recording the expense.
    pub user_id: UserID,
    /// The expense category.
    pub category_id: CategoryId,
    /// The subcategory within the category, if any. Its parent must be
    /// `category_id`.
    pub subcategory_id: Option<SubcategoryId>,
    /// The amount spent. Must be positive.
    pub amount: f64,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The date of the expense.
    pub date: Date,
    /// The payment method used.
    pub payment_method_id: PaymentMethodId,
}

/// An expense record joined with its category, subcategory, and
/// payment-method names, as returned by the list and report endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDetails {
    /// The record's ID in the application database.
    pub id: ExpenseId,
    /// The amount spent.
    pub amount: f64,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The date of the expense.
    pub date: Date,
    /// The derived financial-year label.
    pub financial_year: String,
    /// The derived month label.
    pub month: String,
    /// The name of the expense category.
    pub category_name: String,
    /// The name of the subcategory, if the expense has one.
    pub subcategory_name: Option<String>,
    /// The name of the payment method.
    pub payment_method_name: String,
}
