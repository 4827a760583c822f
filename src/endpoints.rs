//! The API endpoint URIs.

/// The route to request a cup of coffee (experimental).
pub const COFFEE: &str = "/api/coffee";
/// The route for registering a new user.
pub const USERS: &str = "/api/users";
/// The route for logging in a user.
pub const LOG_IN: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route for reading the authenticated user.
pub const AUTH_USER: &str = "/api/auth/user";
/// The route for reading and updating the authenticated user's settings.
pub const USER_SETTINGS: &str = "/api/user-settings";
/// The route for listing and creating income categories.
pub const INCOME_CATEGORIES: &str = "/api/income-categories";
/// The route for listing and creating expense categories.
pub const EXPENSE_CATEGORIES: &str = "/api/expense-categories";
/// The route for listing and creating expense subcategories.
pub const EXPENSE_SUBCATEGORIES: &str = "/api/expense-subcategories";
/// The route for listing and creating payment methods.
pub const PAYMENT_METHODS: &str = "/api/payment-methods";
/// The route for listing and recording income.
pub const INCOME: &str = "/api/income";
/// The route for listing and recording expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route for the dashboard summary.
pub const DASHBOARD_SUMMARY: &str = "/api/dashboard/summary";
/// The route for the income report over a date range.
pub const INCOME_REPORT: &str = "/api/reports/income";
/// The route for the expense report over a date range.
pub const EXPENSES_REPORT: &str = "/api/reports/expenses";
