//! Route handlers for listing and creating categories and subcategories.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    category::{
        CategoryId, CategoryName, ExpenseCategory, ExpenseSubcategory, IncomeCategory,
        create_expense_category, create_expense_subcategory, create_income_category,
        get_all_expense_categories, get_all_expense_subcategories, get_all_income_categories,
        get_expense_subcategories,
    },
};

/// The fields the client submits to create a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryForm {
    /// The category name.
    pub name: String,
    /// An optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// The household member this income belongs to. Ignored for expense
    /// categories.
    #[serde(default)]
    pub income_earner_name: Option<String>,
}

/// The fields the client submits to create an expense subcategory.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubcategoryForm {
    /// The subcategory name.
    pub name: String,
    /// The parent expense category.
    pub category_id: CategoryId,
}

/// The query parameters for listing expense subcategories.
#[derive(Debug, Deserialize)]
pub struct SubcategoryQuery {
    /// When set, only subcategories of this category are returned.
    pub category_id: Option<CategoryId>,
}

/// A route handler for listing all income categories.
pub async fn get_income_categories_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<IncomeCategory>>, Error> {
    let connection = state.connection()?;

    Ok(Json(get_all_income_categories(&connection)?))
}

/// A route handler for creating an income category.
pub async fn create_income_category_endpoint(
    State(state): State<AppState>,
    Json(form): Json<CategoryForm>,
) -> Result<(StatusCode, Json<IncomeCategory>), Error> {
    let name = CategoryName::new(&form.name)?;

    let connection = state.connection()?;
    let category =
        create_income_category(name, form.description, form.income_earner_name, &connection)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// A route handler for listing all expense categories.
pub async fn get_expense_categories_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseCategory>>, Error> {
    let connection = state.connection()?;

    Ok(Json(get_all_expense_categories(&connection)?))
}

/// A route handler for creating an expense category.
pub async fn create_expense_category_endpoint(
    State(state): State<AppState>,
    Json(form): Json<CategoryForm>,
) -> Result<(StatusCode, Json<ExpenseCategory>), Error> {
    let name = CategoryName::new(&form.name)?;

    let connection = state.connection()?;
    let category = create_expense_category(name, form.description, &connection)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// A route handler for listing expense subcategories, optionally filtered by
/// their parent category.
pub async fn get_expense_subcategories_endpoint(
    State(state): State<AppState>,
    Query(query): Query<SubcategoryQuery>,
) -> Result<Json<Vec<ExpenseSubcategory>>, Error> {
    let connection = state.connection()?;

    let subcategories = match query.category_id {
        Some(category_id) => get_expense_subcategories(category_id, &connection)?,
        None => get_all_expense_subcategories(&connection)?,
    };

    Ok(Json(subcategories))
}

/// A route handler for creating an expense subcategory.
pub async fn create_expense_subcategory_endpoint(
    State(state): State<AppState>,
    Json(form): Json<SubcategoryForm>,
) -> Result<(StatusCode, Json<ExpenseSubcategory>), Error> {
    let name = CategoryName::new(&form.name)?;

    let connection = state.connection()?;
    let subcategory = create_expense_subcategory(name, form.category_id, &connection)?;

    Ok((StatusCode::CREATED, Json(subcategory)))
}
