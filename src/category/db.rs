//! Database operations for income categories, expense categories, and
//! expense subcategories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{
        CategoryId, CategoryName, ExpenseCategory, ExpenseSubcategory, IncomeCategory,
        SubcategoryId,
    },
};

/// Initialize the category tables and indexes.
pub fn create_category_tables(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS income_category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT,
            income_earner_name TEXT
        );

        CREATE TABLE IF NOT EXISTS expense_category (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL UNIQUE,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS expense_subcategory (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            category_id INTEGER NOT NULL,
            FOREIGN KEY(category_id) REFERENCES expense_category(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_expense_subcategory_category
            ON expense_subcategory(category_id);",
    )?;

    Ok(())
}

/// Create an income category and return it with its generated ID.
///
/// # Errors
///
/// Returns [Error::DuplicateName] if an income category named `name` already
/// exists.
pub fn create_income_category(
    name: CategoryName,
    description: Option<String>,
    income_earner_name: Option<String>,
    connection: &Connection,
) -> Result<IncomeCategory, Error> {
    connection.execute(
        "INSERT INTO income_category (name, description, income_earner_name) VALUES (?1, ?2, ?3)",
        (name.as_ref(), &description, &income_earner_name),
    )?;

    let id = connection.last_insert_rowid();

    Ok(IncomeCategory {
        id,
        name,
        description,
        income_earner_name,
    })
}

/// Retrieve a single income category by ID.
pub fn get_income_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<IncomeCategory, Error> {
    connection
        .prepare(
            "SELECT id, name, description, income_earner_name FROM income_category
                WHERE id = :id",
        )?
        .query_row(&[(":id", &category_id)], map_income_category_row)
        .map_err(|error| error.into())
}

/// Retrieve all income categories ordered alphabetically by name.
pub fn get_all_income_categories(connection: &Connection) -> Result<Vec<IncomeCategory>, Error> {
    connection
        .prepare(
            "SELECT id, name, description, income_earner_name FROM income_category
                ORDER BY name ASC",
        )?
        .query_map([], map_income_category_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Get the number of income categories in the database.
///
/// Used to decide whether the default taxonomy should be seeded.
pub fn count_income_categories(connection: &Connection) -> Result<usize, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM income_category", [], |row| {
            row.get::<_, i64>(0).map(|count| count as usize)
        })
        .map_err(|error| error.into())
}

/// Create an expense category and return it with its generated ID.
///
/// # Errors
///
/// Returns [Error::DuplicateName] if an expense category named `name`
/// already exists.
pub fn create_expense_category(
    name: CategoryName,
    description: Option<String>,
    connection: &Connection,
) -> Result<ExpenseCategory, Error> {
    connection.execute(
        "INSERT INTO expense_category (name, description) VALUES (?1, ?2)",
        (name.as_ref(), &description),
    )?;

    let id = connection.last_insert_rowid();

    Ok(ExpenseCategory {
        id,
        name,
        description,
    })
}

/// Retrieve a single expense category by ID.
pub fn get_expense_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<ExpenseCategory, Error> {
    connection
        .prepare("SELECT id, name, description FROM expense_category WHERE id = :id")?
        .query_row(&[(":id", &category_id)], map_expense_category_row)
        .map_err(|error| error.into())
}

/// Retrieve all expense categories ordered alphabetically by name.
pub fn get_all_expense_categories(connection: &Connection) -> Result<Vec<ExpenseCategory>, Error> {
    connection
        .prepare("SELECT id, name, description FROM expense_category ORDER BY name ASC")?
        .query_map([], map_expense_category_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Create an expense subcategory under `category_id` and return it with its
/// generated ID.
///
/// # Errors
///
/// Returns [Error::InvalidCategory] if `category_id` does not refer to an
/// existing expense category.
pub fn create_expense_subcategory(
    name: CategoryName,
    category_id: CategoryId,
    connection: &Connection,
) -> Result<ExpenseSubcategory, Error> {
    get_expense_category(category_id, connection).map_err(|error| match error {
        // A 'not found' error does not make sense on an insert function,
        // so we instead indicate that the category id (a foreign key) is invalid.
        Error::NotFound => Error::InvalidCategory(category_id),
        error => error,
    })?;

    connection.execute(
        "INSERT INTO expense_subcategory (name, category_id) VALUES (?1, ?2)",
        (name.as_ref(), category_id),
    )?;

    let id = connection.last_insert_rowid();

    Ok(ExpenseSubcategory {
        id,
        name,
        category_id,
    })
}

/// Retrieve a single expense subcategory by ID.
pub fn get_expense_subcategory(
    subcategory_id: SubcategoryId,
    connection: &Connection,
) -> Result<ExpenseSubcategory, Error> {
    connection
        .prepare("SELECT id, name, category_id FROM expense_subcategory WHERE id = :id")?
        .query_row(&[(":id", &subcategory_id)], map_subcategory_row)
        .map_err(|error| error.into())
}

/// Retrieve the subcategories of `category_id` ordered alphabetically by name.
pub fn get_expense_subcategories(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<ExpenseSubcategory>, Error> {
    connection
        .prepare(
            "SELECT id, name, category_id FROM expense_subcategory
                WHERE category_id = :category_id ORDER BY name ASC",
        )?
        .query_map(&[(":category_id", &category_id)], map_subcategory_row)?
        .map(|maybe_subcategory| maybe_subcategory.map_err(|error| error.into()))
        .collect()
}

/// Retrieve all expense subcategories ordered alphabetically by name.
pub fn get_all_expense_subcategories(
    connection: &Connection,
) -> Result<Vec<ExpenseSubcategory>, Error> {
    connection
        .prepare("SELECT id, name, category_id FROM expense_subcategory ORDER BY name ASC")?
        .query_map([], map_subcategory_row)?
        .map(|maybe_subcategory| maybe_subcategory.map_err(|error| error.into()))
        .collect()
}

fn map_income_category_row(row: &Row) -> Result<IncomeCategory, rusqlite::Error> {
    let raw_name: String = row.get(1)?;

    Ok(IncomeCategory {
        id: row.get(0)?,
        name: CategoryName::new_unchecked(&raw_name),
        description: row.get(2)?,
        income_earner_name: row.get(3)?,
    })
}

fn map_expense_category_row(row: &Row) -> Result<ExpenseCategory, rusqlite::Error> {
    let raw_name: String = row.get(1)?;

    Ok(ExpenseCategory {
        id: row.get(0)?,
        name: CategoryName::new_unchecked(&raw_name),
        description: row.get(2)?,
    })
}

fn map_subcategory_row(row: &Row) -> Result<ExpenseSubcategory, rusqlite::Error> {
    let raw_name: String = row.get(1)?;

    Ok(ExpenseSubcategory {
        id: row.get(0)?,
        name: CategoryName::new_unchecked(&raw_name),
        category_id: row.get(2)?,
    })
}

#[cfg(test)]
mod category_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        category::{
            CategoryName, create_expense_category, create_expense_subcategory,
            create_income_category, get_all_expense_categories, get_all_expense_subcategories,
            get_all_income_categories, get_expense_subcategories, get_income_category,
        },
    };

    use super::{count_income_categories, create_category_tables};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        create_category_tables(&connection).expect("Could not create category tables");
        connection
    }

    #[test]
    fn create_income_category_succeeds() {
        let connection = get_test_db_connection();
        let name = CategoryName::new("Salary").unwrap();

        let category = create_income_category(
            name.clone(),
            Some("Regular employment salary".to_owned()),
            None,
            &connection,
        )
        .expect("Could not create income category");

        assert!(category.id > 0);
        assert_eq!(category.name, name);
        assert_eq!(
            category.description.as_deref(),
            Some("Regular employment salary")
        );
    }

    #[test]
    fn create_income_category_fails_on_duplicate_name() {
        let connection = get_test_db_connection();
        let name = CategoryName::new_unchecked("Salary");
        create_income_category(name.clone(), None, None, &connection).unwrap();

        let result = create_income_category(name, None, None, &connection);

        assert_eq!(result, Err(Error::DuplicateName));
    }

    #[test]
    fn get_income_category_with_invalid_id_returns_not_found() {
        let connection = get_test_db_connection();

        let result = get_income_category(999, &connection);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn income_categories_are_sorted_by_name() {
        let connection = get_test_db_connection();
        create_income_category(CategoryName::new_unchecked("Salary"), None, None, &connection)
            .unwrap();
        create_income_category(CategoryName::new_unchecked("Bonus"), None, None, &connection)
            .unwrap();

        let categories = get_all_income_categories(&connection).unwrap();

        let names: Vec<&str> = categories
            .iter()
            .map(|category| category.name.as_ref())
            .collect();
        assert_eq!(names, ["Bonus", "Salary"]);
    }

    #[test]
    fn count_income_categories_counts_rows() {
        let connection = get_test_db_connection();
        assert_eq!(count_income_categories(&connection), Ok(0));

        create_income_category(CategoryName::new_unchecked("Salary"), None, None, &connection)
            .unwrap();

        assert_eq!(count_income_categories(&connection), Ok(1));
    }

    #[test]
    fn expense_categories_are_sorted_by_name() {
        let connection = get_test_db_connection();
        create_expense_category(CategoryName::new_unchecked("Housing"), None, &connection)
            .unwrap();
        create_expense_category(
            CategoryName::new_unchecked("Food & Dining"),
            None,
            &connection,
        )
        .unwrap();

        let categories = get_all_expense_categories(&connection).unwrap();

        let names: Vec<&str> = categories
            .iter()
            .map(|category| category.name.as_ref())
            .collect();
        assert_eq!(names, ["Food & Dining", "Housing"]);
    }

    #[test]
    fn create_subcategory_succeeds() {
        let connection = get_test_db_connection();
        let category = create_expense_category(
            CategoryName::new_unchecked("Food & Dining"),
            None,
            &connection,
        )
        .unwrap();

        let subcategory = create_expense_subcategory(
            CategoryName::new_unchecked("Grocery"),
            category.id,
            &connection,
        )
        .expect("Could not create subcategory");

        assert!(subcategory.id > 0);
        assert_eq!(subcategory.category_id, category.id);
    }

    #[test]
    fn create_subcategory_fails_with_invalid_parent() {
        let connection = get_test_db_connection();

        let result = create_expense_subcategory(
            CategoryName::new_unchecked("Grocery"),
            42,
            &connection,
        );

        assert_eq!(result, Err(Error::InvalidCategory(42)));
    }

    #[test]
    fn subcategories_can_be_filtered_by_parent() {
        let connection = get_test_db_connection();
        let food = create_expense_category(
            CategoryName::new_unchecked("Food & Dining"),
            None,
            &connection,
        )
        .unwrap();
        let transport = create_expense_category(
            CategoryName::new_unchecked("Transportation"),
            None,
            &connection,
        )
        .unwrap();
        create_expense_subcategory(CategoryName::new_unchecked("Grocery"), food.id, &connection)
            .unwrap();
        create_expense_subcategory(CategoryName::new_unchecked("Fuel"), transport.id, &connection)
            .unwrap();

        let subcategories = get_expense_subcategories(food.id, &connection).unwrap();

        assert_eq!(subcategories.len(), 1);
        assert_eq!(subcategories[0].name.as_ref(), "Grocery");

        let all_subcategories = get_all_expense_subcategories(&connection).unwrap();
        assert_eq!(all_subcategories.len(), 2);
    }
}
