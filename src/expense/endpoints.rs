//! Route handlers for recording and listing expenses.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    category::{CategoryId, SubcategoryId},
    expense::{
        Expense, ExpenseDetails, NewExpense, create_expense, get_expenses_for_user,
        get_expenses_in_range,
    },
    income::{ListParams, ReportParams},
    payment_method::PaymentMethodId,
    user::UserID,
};

/// The number of records returned when the client does not specify a limit.
const DEFAULT_LIMIT: u32 = 50;

/// The fields the client submits to record an expense.
///
/// The financial-year and month labels are not accepted from the client,
/// they are derived from `date` on the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseForm {
    /// The expense category.
    pub category_id: CategoryId,
    /// The subcategory within the category, if any.
    #[serde(default)]
    pub subcategory_id: Option<SubcategoryId>,
    /// The amount spent. Must be positive.
    pub amount: f64,
    /// An optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// The date of the expense, as `YYYY-MM-DD`.
    pub date: Date,
    /// The payment method used.
    pub payment_method_id: PaymentMethodId,
}

/// A route handler for listing the authenticated user's most recent expenses.
pub async fn get_expenses_endpoint(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<ExpenseDetails>>, Error> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let connection = state.connection()?;

    Ok(Json(get_expenses_for_user(user_id, limit, &connection)?))
}

/// A route handler for recording an expense.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Json(form): Json<ExpenseForm>,
) -> Result<(StatusCode, Json<Expense>), Error> {
    let new_expense = NewExpense {
        user_id,
        category_id: form.category_id,
        subcategory_id: form.subcategory_id,
        amount: form.amount,
        description: form.description,
        date: form.date,
        payment_method_id: form.payment_method_id,
    };

    let connection = state.connection()?;
    let expense = create_expense(new_expense, &connection)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// A route handler for the expense report over an inclusive date range.
///
/// # Errors
///
/// Returns [Error::MissingDateRange] when either `start_date` or `end_date`
/// is absent.
pub async fn get_expense_report_endpoint(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<ExpenseDetails>>, Error> {
    let (start, end) = params.require_range()?;

    let connection = state.connection()?;

    Ok(Json(get_expenses_in_range(user_id, start, end, &connection)?))
}
