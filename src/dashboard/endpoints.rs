//! The route handler for the dashboard summary.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    dashboard::{
        DashboardSummary,
        db::{get_expense_amounts_by_category, get_income_amounts},
        summarize,
    },
    period::month_name,
    user::UserID,
};

/// The query parameters for the dashboard summary.
///
/// Both parameters default to the current date: the current month name and
/// the current calendar year string. Note that for January through March of
/// a financial year the caller must pass the financial year's start year
/// explicitly.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    /// The month to summarize, as a full English month name, e.g. "July".
    pub month: Option<String>,
    /// The financial year to summarize, as the starting calendar year, e.g.
    /// "2024".
    pub year: Option<String>,
}

/// A route handler for the authenticated user's dashboard summary.
pub async fn get_dashboard_summary(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserID>,
    Query(params): Query<SummaryParams>,
) -> Result<Json<DashboardSummary>, Error> {
    let today = OffsetDateTime::now_utc().date();
    let month = params.month.unwrap_or_else(|| month_name(today.month()));
    let year = params.year.unwrap_or_else(|| today.year().to_string());

    let connection = state.connection()?;
    let income_amounts = get_income_amounts(user_id, &month, &year, &connection)?;
    let expense_rows = get_expense_amounts_by_category(user_id, &month, &year, &connection)?;

    Ok(Json(summarize(&income_amounts, &expense_rows)))
}

#[cfg(test)]
mod dashboard_endpoint_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::json;

    use crate::{
        AppState, build_router,
        category::{ExpenseCategory, IncomeCategory},
        dashboard::DashboardSummary,
        payment_method::PaymentMethod,
    };

    struct Fixture {
        server: TestServer,
        income_category: IncomeCategory,
        expense_categories: Vec<ExpenseCategory>,
        method: PaymentMethod,
    }

    async fn get_test_fixture() -> Fixture {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        let state = AppState::new(connection, "42").expect("Could not create app state.");
        let mut server =
            TestServer::try_new(build_router(state)).expect("Could not create test server.");
        server.save_cookies();

        server
            .post("/api/users")
            .json(&json!({
                "email": "test@test.com",
                "password": "averystrongandlongpassword",
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let income_category = server
            .post("/api/income-categories")
            .json(&json!({ "name": "Salary" }))
            .await
            .json::<IncomeCategory>();

        let mut expense_categories = Vec::new();
        for name in ["Housing", "Food & Dining", "Transportation"] {
            let category = server
                .post("/api/expense-categories")
                .json(&json!({ "name": name }))
                .await
                .json::<ExpenseCategory>();
            expense_categories.push(category);
        }

        let method = server
            .post("/api/payment-methods")
            .json(&json!({ "name": "Cash" }))
            .await
            .json::<PaymentMethod>();

        Fixture {
            server,
            income_category,
            expense_categories,
            method,
        }
    }

    impl Fixture {
        async fn add_income(&self, amount: f64, date: &str) {
            self.server
                .post("/api/income")
                .json(&json!({
                    "category_id": self.income_category.id,
                    "amount": amount,
                    "date": date,
                    "payment_method_id": self.method.id,
                }))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        async fn add_expense(&self, category_index: usize, amount: f64, date: &str) {
            self.server
                .post("/api/expenses")
                .json(&json!({
                    "category_id": self.expense_categories[category_index].id,
                    "amount": amount,
                    "date": date,
                    "payment_method_id": self.method.id,
                }))
                .await
                .assert_status(axum::http::StatusCode::CREATED);
        }

        async fn get_summary(&self, month: &str, year: &str) -> DashboardSummary {
            let response = self
                .server
                .get("/api/dashboard/summary")
                .add_query_param("month", month)
                .add_query_param("year", year)
                .await;

            response.assert_status_ok();
            response.json::<DashboardSummary>()
        }
    }

    #[tokio::test]
    async fn summary_aggregates_the_requested_period() {
        let fixture = get_test_fixture().await;
        fixture.add_income(5000.0, "2024-07-01").await;
        fixture.add_income(250.0, "2024-07-20").await;
        // Outside the requested month.
        fixture.add_income(999.0, "2024-08-01").await;

        fixture.add_expense(0, 1500.0, "2024-07-05").await;
        fixture.add_expense(1, 300.0, "2024-07-10").await;
        fixture.add_expense(1, 200.0, "2024-07-12").await;

        let summary = fixture.get_summary("July", "2024").await;

        assert_eq!(summary.total_income, 5250.0);
        assert_eq!(summary.total_expenses, 2000.0);
        assert_eq!(summary.net_savings, 3250.0);

        let names: Vec<&str> = summary
            .top_expense_categories
            .iter()
            .map(|spend| spend.category_name.as_str())
            .collect();
        assert_eq!(names, ["Housing", "Food & Dining"]);
        assert_eq!(summary.top_expense_categories[0].percentage, 75);
        assert_eq!(summary.top_expense_categories[1].percentage, 25);
    }

    #[tokio::test]
    async fn summary_is_empty_for_a_quiet_month() {
        let fixture = get_test_fixture().await;
        fixture.add_income(5000.0, "2024-07-01").await;

        let summary = fixture.get_summary("June", "2024").await;

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.top_expense_categories, []);
    }

    #[tokio::test]
    async fn march_is_reported_under_the_previous_start_year() {
        let fixture = get_test_fixture().await;
        // March 2025 belongs to the financial year labelled "2024".
        fixture.add_expense(0, 100.0, "2025-03-15").await;

        let summary = fixture.get_summary("March", "2024").await;
        assert_eq!(summary.total_expenses, 100.0);

        let summary = fixture.get_summary("March", "2025").await;
        assert_eq!(summary.total_expenses, 0.0);
    }

    #[tokio::test]
    async fn summary_only_includes_the_authenticated_user() {
        let mut fixture = get_test_fixture().await;
        fixture.add_income(5000.0, "2024-07-01").await;

        // A second user with no records sees an empty summary.
        fixture.server.clear_cookies();
        fixture
            .server
            .post("/api/users")
            .json(&json!({
                "email": "other@test.com",
                "password": "anotherverystrongpassword",
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let summary = fixture.get_summary("July", "2024").await;

        assert_eq!(summary.total_income, 0.0);
    }
}
