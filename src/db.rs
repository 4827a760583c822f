//! Database initialization and default data seeding.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{
    Error,
    category::{
        CategoryName, count_income_categories, create_category_tables, create_expense_category,
        create_expense_subcategory, create_income_category,
    },
    expense::create_expense_table,
    income::create_income_table,
    payment_method::{create_payment_method, create_payment_method_table},
    settings::create_settings_table,
    user::create_user_table,
};

/// Create the tables for the domain models if they do not already exist.
///
/// All tables are created within a single exclusive transaction so that the
/// database is either fully initialized or untouched.
///
/// # Errors
///
/// Returns an error if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_user_table(&transaction)?;
    create_settings_table(&transaction)?;
    create_category_tables(&transaction)?;
    create_payment_method_table(&transaction)?;
    create_income_table(&transaction)?;
    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

/// The default income categories, as `(name, description)` pairs.
const DEFAULT_INCOME_CATEGORIES: [(&str, &str); 8] = [
    ("Salary", "Regular employment salary"),
    ("Rental Income", "Income from property rent"),
    ("Dividend Income", "Dividends from investments"),
    ("Interest Income", "Interest from savings and deposits"),
    ("Business Income", "Income from business activities"),
    ("Freelance Income", "Income from freelance work"),
    ("Bonus", "Performance bonus and incentives"),
    ("Other Income", "Other miscellaneous income"),
];

/// The default expense categories, as `(name, description, subcategories)`.
const DEFAULT_EXPENSE_CATEGORIES: [(&str, &str, &[&str]); 10] = [
    (
        "Food & Dining",
        "All food related expenses",
        &["Grocery", "Vegetables", "Restaurants", "Fast Food", "Coffee Shops"],
    ),
    (
        "Transportation",
        "Travel and transportation expenses",
        &["Fuel", "Public Transport", "Taxi/Uber", "Vehicle Maintenance", "Parking"],
    ),
    (
        "Housing",
        "Housing and accommodation expenses",
        &["Rent", "Mortgage", "Property Tax", "Home Maintenance", "Furniture"],
    ),
    (
        "Healthcare",
        "Medical and health expenses",
        &["Doctor Visits", "Medicines", "Health Insurance", "Dental", "Vision"],
    ),
    (
        "Entertainment",
        "Entertainment and leisure expenses",
        &["Movies", "Games", "Books", "Streaming Services", "Events"],
    ),
    (
        "Utilities",
        "Utility bills and services",
        &["Electricity", "Water", "Gas", "Internet", "Mobile Bill", "Domestic Help"],
    ),
    (
        "Insurance",
        "Insurance premiums and policies",
        &["Life Insurance", "Health Insurance", "Vehicle Insurance", "Home Insurance"],
    ),
    (
        "Education",
        "Education and learning expenses",
        &["School Fees", "Books", "Online Courses", "Tuition", "Supplies"],
    ),
    (
        "Personal Care",
        "Personal care and grooming",
        &["Haircut", "Cosmetics", "Clothing", "Gym", "Spa"],
    ),
    (
        "Kids Expenses",
        "Children related expenses",
        &["Toys", "Clothes", "School Activities", "Sports", "Healthcare"],
    ),
];

/// The default payment methods, as `(name, description)` pairs.
const DEFAULT_PAYMENT_METHODS: [(&str, &str); 8] = [
    ("Cash", "Cash payments"),
    ("Credit Card", "Credit card payments"),
    ("Debit Card", "Debit card payments"),
    ("UPI", "UPI and digital wallet payments"),
    ("Net Banking", "Online banking transfers"),
    ("Bank Transfer", "Direct bank transfers"),
    ("Cheque", "Cheque payments"),
    ("Other", "Other payment methods"),
];

/// Insert the default categories and payment methods on first start-up.
///
/// The taxonomy is shared across users, so seeding is skipped entirely when
/// any income categories already exist.
///
/// # Errors
///
/// Returns an error if any of the default rows could not be inserted.
pub fn seed_default_taxonomy(connection: &Connection) -> Result<(), Error> {
    if count_income_categories(connection)? > 0 {
        return Ok(());
    }

    tracing::info!("Seeding the default categories and payment methods.");

    for (name, description) in DEFAULT_INCOME_CATEGORIES {
        create_income_category(
            CategoryName::new_unchecked(name),
            Some(description.to_owned()),
            None,
            connection,
        )?;
    }

    for (name, description, subcategories) in DEFAULT_EXPENSE_CATEGORIES {
        let category = create_expense_category(
            CategoryName::new_unchecked(name),
            Some(description.to_owned()),
            connection,
        )?;

        for subcategory_name in subcategories {
            create_expense_subcategory(
                CategoryName::new_unchecked(subcategory_name),
                category.id,
                connection,
            )?;
        }
    }

    for (name, description) in DEFAULT_PAYMENT_METHODS {
        create_payment_method(name, Some(description.to_owned()), connection)?;
    }

    Ok(())
}
