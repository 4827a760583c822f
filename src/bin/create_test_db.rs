//! A command line tool for creating a database populated with sample data
//! for local development.

use std::str::FromStr;

use clap::Parser;
use email_address::EmailAddress;
use rusqlite::Connection;
use time::{Date, Month};

use hisab::{
    category::{
        ExpenseCategory, IncomeCategory, get_all_expense_categories, get_all_income_categories,
    },
    db::{initialize, seed_default_taxonomy},
    expense::{NewExpense, create_expense},
    income::{NewIncome, create_income},
    password::{PasswordHash, ValidatedPassword},
    payment_method::{PaymentMethod, get_all_payment_methods},
    settings::create_default_settings,
    user::create_user,
};

/// Create a SQLite database with a test user and sample transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path for the new SQLite database.
    #[arg(long, default_value = "test.db")]
    db_path: String,
}

const TEST_USER_EMAIL: &str = "test@example.com";
const TEST_USER_PASSWORD: &str = "testpassword";

/// The months covered by the sample data: the second half of the 2024
/// financial year, crossing the calendar-year boundary.
const SAMPLE_MONTHS: [(i32, Month); 6] = [
    (2024, Month::October),
    (2024, Month::November),
    (2024, Month::December),
    (2025, Month::January),
    (2025, Month::February),
    (2025, Month::March),
];

fn main() {
    let args = Args::parse();

    let connection = Connection::open(&args.db_path).expect("Could not create the database file.");
    initialize(&connection).expect("Could not initialize the database.");
    seed_default_taxonomy(&connection).expect("Could not seed the default taxonomy.");

    // The password check is skipped on purpose, this user never leaves the
    // developer's machine.
    let password_hash = PasswordHash::new(
        ValidatedPassword::new_unchecked(TEST_USER_PASSWORD),
        PasswordHash::DEFAULT_COST,
    )
    .expect("Could not hash the test password.");
    let user = create_user(
        EmailAddress::from_str(TEST_USER_EMAIL).expect("Could not parse the test email."),
        password_hash,
        &connection,
    )
    .expect("Could not create the test user.");
    create_default_settings(user.id, &connection).expect("Could not create the test settings.");

    let income_categories =
        get_all_income_categories(&connection).expect("Could not list income categories.");
    let expense_categories =
        get_all_expense_categories(&connection).expect("Could not list expense categories.");
    let payment_methods =
        get_all_payment_methods(&connection).expect("Could not list payment methods.");

    let salary = income_category_id(&income_categories, "Salary");
    let freelance = income_category_id(&income_categories, "Freelance Income");
    let housing = expense_category_id(&expense_categories, "Housing");
    let food = expense_category_id(&expense_categories, "Food & Dining");
    let transport = expense_category_id(&expense_categories, "Transportation");
    let bank_transfer = payment_method_id(&payment_methods, "Bank Transfer");
    let upi = payment_method_id(&payment_methods, "UPI");
    let cash = payment_method_id(&payment_methods, "Cash");

    for (index, (year, month)) in SAMPLE_MONTHS.into_iter().enumerate() {
        let day = |day: u8| {
            Date::from_calendar_date(year, month, day).expect("Could not build a sample date.")
        };

        create_income(
            NewIncome {
                user_id: user.id,
                category_id: salary,
                amount: 5200.0,
                description: Some("Monthly salary".to_owned()),
                date: day(1),
                payment_method_id: bank_transfer,
            },
            &connection,
        )
        .expect("Could not create sample income.");

        if index % 2 == 0 {
            create_income(
                NewIncome {
                    user_id: user.id,
                    category_id: freelance,
                    amount: 600.0 + 75.0 * index as f64,
                    description: Some("Side project invoice".to_owned()),
                    date: day(18),
                    payment_method_id: bank_transfer,
                },
                &connection,
            )
            .expect("Could not create sample income.");
        }

        for (category_id, amount, day_of_month, payment_method, description) in [
            (housing, 1800.0, 2, bank_transfer, "Rent"),
            (food, 320.0 + 20.0 * index as f64, 6, upi, "Groceries"),
            (food, 85.0, 14, upi, "Dinner out"),
            (transport, 110.0, 9, cash, "Fuel"),
        ] {
            create_expense(
                NewExpense {
                    user_id: user.id,
                    category_id,
                    subcategory_id: None,
                    amount,
                    description: Some(description.to_owned()),
                    date: day(day_of_month),
                    payment_method_id: payment_method,
                },
                &connection,
            )
            .expect("Could not create sample expense.");
        }
    }

    println!(
        "Created {} with the user {TEST_USER_EMAIL} (password: {TEST_USER_PASSWORD}).",
        args.db_path
    );
}

fn income_category_id(categories: &[IncomeCategory], name: &str) -> i64 {
    categories
        .iter()
        .find(|category| category.name.as_ref() == name)
        .unwrap_or_else(|| panic!("Missing default income category {name}"))
        .id
}

fn expense_category_id(categories: &[ExpenseCategory], name: &str) -> i64 {
    categories
        .iter()
        .find(|category| category.name.as_ref() == name)
        .unwrap_or_else(|| panic!("Missing default expense category {name}"))
        .id
}

fn payment_method_id(methods: &[PaymentMethod], name: &str) -> i64 {
    methods
        .iter()
        .find(|method| method.name == name)
        .unwrap_or_else(|| panic!("Missing default payment method {name}"))
        .id
}
