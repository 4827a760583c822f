//! The two-level expense taxonomy and the single-level income taxonomy.
//!
//! Income categories stand alone; expense categories may have subcategories
//! whose parent category must match the category on any expense that uses
//! them.

mod db;
mod domain;
mod endpoints;

pub use db::{
    count_income_categories, create_category_tables, create_expense_category,
    create_expense_subcategory, create_income_category, get_all_expense_categories,
    get_all_expense_subcategories, get_all_income_categories, get_expense_category,
    get_expense_subcategories, get_expense_subcategory, get_income_category,
};
pub use domain::{
    CategoryId, CategoryName, ExpenseCategory, ExpenseSubcategory, IncomeCategory, SubcategoryId,
};
pub use endpoints::{
    CategoryForm, SubcategoryForm, create_expense_category_endpoint,
    create_expense_subcategory_endpoint, create_income_category_endpoint,
    get_expense_categories_endpoint, get_expense_subcategories_endpoint,
    get_income_categories_endpoint,
};
