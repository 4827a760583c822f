//! Route handlers for recording and listing income.

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    category::CategoryId,
    income::{Income, IncomeDetails, NewIncome, create_income, get_income_for_user, get_income_in_range},
    payment_method::PaymentMethodId,
    user::UserID,
};

/// The number of records returned when the client does not specify a limit.
const DEFAULT_LIMIT: u32 = 50;

/// The fields the client submits to record income.
///
/// The financial-year and month labels are not accepted from the client,
/// they are derived from `date` on the server.
#[derive(Debug, Serialize, Deserialize)]
pub struct IncomeForm {
    /// The income category.
    pub category_id: CategoryId,
    /// The amount received. Must be positive.
    pub amount: f64,
    /// An optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// The date the income was received, as `YYYY-MM-DD`.
    pub date: Date,
    /// The payment method the income arrived through.
    pub payment_method_id: PaymentMethodId,
}

/// The query parameters for listing income.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// The maximum number of records to return. Defaults to 50.
    pub limit: Option<u32>,
}

/// The query parameters for the date-range report endpoints.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// The first date to include, as `YYYY-MM-DD`.
    pub start_date: Option<Date>,
    /// The last date to include, as `YYYY-MM-DD`.
    pub end_date: Option<Date>,
}

impl ReportParams {
    /// Unpack the date range, requiring both ends to be present.
    pub(crate) fn require_range(self) -> Result<(Date, Date), Error> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(Error::MissingDateRange),
        }
    }
}

/// A route handler for listing the authenticated user's most recent income.
pub async fn get_income_endpoint(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<IncomeDetails>>, Error> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let connection = state.connection()?;

    Ok(Json(get_income_for_user(user_id, limit, &connection)?))
}

/// A route handler for recording income.
pub async fn create_income_endpoint(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Json(form): Json<IncomeForm>,
) -> Result<(StatusCode, Json<Income>), Error> {
    let new_income = NewIncome {
        user_id,
        category_id: form.category_id,
        amount: form.amount,
        description: form.description,
        date: form.date,
        payment_method_id: form.payment_method_id,
    };

    let connection = state.connection()?;
    let income = create_income(new_income, &connection)?;

    Ok((StatusCode::CREATED, Json(income)))
}

/// A route handler for the income report over an inclusive date range.
///
/// # Errors
///
/// Returns [Error::MissingDateRange] when either `start_date` or `end_date`
/// is absent.
pub async fn get_income_report_endpoint(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<ReportParams>,
) -> Result<Json<Vec<IncomeDetails>>, Error> {
    let (start, end) = params.require_range()?;

    let connection = state.connection()?;

    Ok(Json(get_income_in_range(user_id, start, end, &connection)?))
}
