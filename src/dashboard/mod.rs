//! The dashboard summary: monthly totals, net savings, and the top expense
//! categories with their share of spending.
//!
//! The aggregation itself is a set of pure functions over rows fetched for a
//! (user, month, financial-year) triple; nothing is cached or precomputed.

mod db;
mod endpoints;
mod summary;

pub use endpoints::{SummaryParams, get_dashboard_summary};
pub use summary::{CategorySpend, DashboardSummary, TOP_CATEGORY_COUNT, summarize};
