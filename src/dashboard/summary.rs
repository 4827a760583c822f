//! Pure aggregation functions for the dashboard summary.

use std::{cmp::Ordering, collections::HashMap};

use serde::{Deserialize, Serialize};

/// The number of expense categories included in the breakdown.
pub const TOP_CATEGORY_COUNT: usize = 5;

/// One expense category's share of a month's spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpend {
    /// The expense category's name.
    pub category_name: String,
    /// The total spent in the category.
    pub amount: f64,
    /// The category's share of all spending in the period, rounded to the
    /// nearest whole percent. Zero when there was no spending at all.
    pub percentage: u32,
}

/// The aggregated view of one month within a financial year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The sum of all income amounts in the period.
    pub total_income: f64,
    /// The sum of all expense amounts in the period.
    pub total_expenses: f64,
    /// `total_income - total_expenses`. Negative when the household spent
    /// more than it earned.
    pub net_savings: f64,
    /// The top spending categories, largest first, at most
    /// [TOP_CATEGORY_COUNT] entries.
    pub top_expense_categories: Vec<CategorySpend>,
}

/// Aggregate a month's income amounts and expense rows into a
/// [DashboardSummary].
///
/// `expense_rows` holds one `(category name, amount)` pair per expense
/// record in the period.
pub fn summarize(income_amounts: &[f64], expense_rows: &[(String, f64)]) -> DashboardSummary {
    let total_income: f64 = income_amounts.iter().sum();
    let total_expenses: f64 = expense_rows.iter().map(|(_, amount)| amount).sum();

    DashboardSummary {
        total_income,
        total_expenses,
        net_savings: total_income - total_expenses,
        top_expense_categories: top_expense_categories(expense_rows, TOP_CATEGORY_COUNT),
    }
}

/// Group `expense_rows` by category name, rank the categories by total
/// spend, and keep the `limit` largest.
///
/// Categories with equal totals are ordered by ascending name so that the
/// ranking is deterministic. Each category's percentage is its share of the
/// sum over *all* rows, not just the top `limit`, and is 0 when that sum is
/// zero.
fn top_expense_categories(expense_rows: &[(String, f64)], limit: usize) -> Vec<CategorySpend> {
    let total: f64 = expense_rows.iter().map(|(_, amount)| amount).sum();

    let mut totals_by_category: HashMap<&str, f64> = HashMap::new();
    for (category_name, amount) in expense_rows {
        *totals_by_category.entry(category_name.as_str()).or_insert(0.0) += amount;
    }

    let mut ranked: Vec<(&str, f64)> = totals_by_category.into_iter().collect();
    ranked.sort_by(|(name_a, amount_a), (name_b, amount_b)| {
        amount_b
            .partial_cmp(amount_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| name_a.cmp(name_b))
    });
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(category_name, amount)| CategorySpend {
            category_name: category_name.to_owned(),
            amount,
            percentage: percentage_of(amount, total),
        })
        .collect()
}

/// `amount` as a share of `total`, rounded to the nearest whole percent.
/// Returns 0 when `total` is zero.
fn percentage_of(amount: f64, total: f64) -> u32 {
    if total > 0.0 {
        (amount / total * 100.0).round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod summary_tests {
    use super::{CategorySpend, summarize, top_expense_categories};

    fn expense(category_name: &str, amount: f64) -> (String, f64) {
        (category_name.to_owned(), amount)
    }

    #[test]
    fn summarize_computes_totals_and_net_savings() {
        let income = [5000.0, 250.0];
        let expenses = [expense("Housing", 1500.0), expense("Food & Dining", 500.0)];

        let summary = summarize(&income, &expenses);

        assert_eq!(summary.total_income, 5250.0);
        assert_eq!(summary.total_expenses, 2000.0);
        assert_eq!(summary.net_savings, 3250.0);
    }

    #[test]
    fn summarize_handles_empty_period() {
        let summary = summarize(&[], &[]);

        assert_eq!(summary.total_income, 0.0);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.net_savings, 0.0);
        assert_eq!(summary.top_expense_categories, []);
    }

    #[test]
    fn net_savings_can_be_negative() {
        let summary = summarize(&[100.0], &[expense("Housing", 150.0)]);

        assert_eq!(summary.net_savings, -50.0);
    }

    #[test]
    fn categories_are_grouped_and_ranked_by_total() {
        let expenses = [
            expense("Food & Dining", 100.0),
            expense("Housing", 900.0),
            expense("Food & Dining", 200.0),
        ];

        let top = top_expense_categories(&expenses, 5);

        assert_eq!(
            top,
            [
                CategorySpend {
                    category_name: "Housing".to_owned(),
                    amount: 900.0,
                    percentage: 75,
                },
                CategorySpend {
                    category_name: "Food & Dining".to_owned(),
                    amount: 300.0,
                    percentage: 25,
                },
            ]
        );
    }

    #[test]
    fn percentages_round_to_the_nearest_whole_percent() {
        let expenses = [
            expense("Housing", 1.0),
            expense("Food & Dining", 1.0),
            expense("Transportation", 1.0),
        ];

        let top = top_expense_categories(&expenses, 5);

        // 1/3 of spending each: 33.33...% rounds down to 33.
        assert!(top.iter().all(|spend| spend.percentage == 33));
    }

    #[test]
    fn percentage_rounds_up_at_the_midpoint() {
        let expenses = [expense("Housing", 1.0), expense("Food & Dining", 7.0)];

        let top = top_expense_categories(&expenses, 5);

        assert_eq!(top[0].percentage, 88); // 87.5 rounds up
        assert_eq!(top[1].percentage, 13); // 12.5 rounds up
    }

    #[test]
    fn percentages_are_zero_when_total_is_zero() {
        let top = top_expense_categories(&[], 5);
        assert_eq!(top, []);

        let summary = summarize(&[1000.0], &[]);
        assert_eq!(summary.top_expense_categories, []);
    }

    #[test]
    fn only_the_top_categories_are_kept() {
        let expenses = [
            expense("A", 60.0),
            expense("B", 50.0),
            expense("C", 40.0),
            expense("D", 30.0),
            expense("E", 20.0),
            expense("F", 10.0),
        ];

        let top = top_expense_categories(&expenses, 5);

        assert_eq!(top.len(), 5);
        assert!(!top.iter().any(|spend| spend.category_name == "F"));
        // Percentages are shares of all six categories, not just the top five.
        assert_eq!(top[0].percentage, 29); // 60/210 = 28.57...
    }

    #[test]
    fn equal_totals_tie_break_by_category_name() {
        let expenses = [
            expense("Utilities", 100.0),
            expense("Entertainment", 100.0),
            expense("Healthcare", 100.0),
        ];

        let top = top_expense_categories(&expenses, 5);

        let names: Vec<&str> = top.iter().map(|spend| spend.category_name.as_str()).collect();
        assert_eq!(names, ["Entertainment", "Healthcare", "Utilities"]);
    }

    #[test]
    fn tie_break_is_stable_across_calls() {
        let expenses = [
            expense("Zoo Trips", 50.0),
            expense("Aquarium Trips", 50.0),
            expense("Museum Trips", 50.0),
        ];

        let first = top_expense_categories(&expenses, 2);
        let second = top_expense_categories(&expenses, 2);

        assert_eq!(first, second);
        assert_eq!(first[0].category_name, "Aquarium Trips");
    }
}
