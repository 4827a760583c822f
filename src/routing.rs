//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::{
    AppState,
    auth::auth_guard,
    category::{
        create_expense_category_endpoint, create_expense_subcategory_endpoint,
        create_income_category_endpoint, get_expense_categories_endpoint,
        get_expense_subcategories_endpoint, get_income_categories_endpoint,
    },
    dashboard::get_dashboard_summary,
    endpoints,
    expense::{create_expense_endpoint, get_expense_report_endpoint, get_expenses_endpoint},
    income::{create_income_endpoint, get_income_endpoint, get_income_report_endpoint},
    log_in::post_log_in,
    log_out::post_log_out,
    payment_method::{create_payment_method_endpoint, get_payment_methods_endpoint},
    register_user::register_user,
    settings::{get_user_settings, put_user_settings},
    user::get_auth_user,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::USERS, post(register_user))
        .route(endpoints::LOG_IN, post(post_log_in))
        .route(endpoints::LOG_OUT, post(post_log_out));

    let protected_routes = Router::new()
        .route(endpoints::AUTH_USER, get(get_auth_user))
        .route(
            endpoints::USER_SETTINGS,
            get(get_user_settings).put(put_user_settings),
        )
        .route(
            endpoints::INCOME_CATEGORIES,
            get(get_income_categories_endpoint).post(create_income_category_endpoint),
        )
        .route(
            endpoints::EXPENSE_CATEGORIES,
            get(get_expense_categories_endpoint).post(create_expense_category_endpoint),
        )
        .route(
            endpoints::EXPENSE_SUBCATEGORIES,
            get(get_expense_subcategories_endpoint).post(create_expense_subcategory_endpoint),
        )
        .route(
            endpoints::PAYMENT_METHODS,
            get(get_payment_methods_endpoint).post(create_payment_method_endpoint),
        )
        .route(
            endpoints::INCOME,
            get(get_income_endpoint).post(create_income_endpoint),
        )
        .route(
            endpoints::EXPENSES,
            get(get_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::DASHBOARD_SUMMARY, get(get_dashboard_summary))
        .route(endpoints::INCOME_REPORT, get(get_income_report_endpoint))
        .route(endpoints::EXPENSES_REPORT, get(get_expense_report_endpoint))
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (
        StatusCode::IM_A_TEAPOT,
        Json(json!({ "error": "I'm a teapot" })),
    )
        .into_response()
}

/// The JSON 404 response for routes that do not exist.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "the requested resource could not be found" })),
    )
        .into_response()
}
