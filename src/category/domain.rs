//! Core category domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated, non-empty category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyName] if `name` is an empty string.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyName)
        } else {
            Ok(Self(name.to_string()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if the non-empty invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Database identifier for an income or expense category.
pub type CategoryId = i64;

/// Database identifier for an expense subcategory.
pub type SubcategoryId = i64;

/// A category for classifying income (e.g., 'Salary', 'Dividend Income').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeCategory {
    /// The category's ID in the application database.
    pub id: CategoryId,
    /// The category's name, unique across income categories.
    pub name: CategoryName,
    /// An optional free-form description.
    pub description: Option<String>,
    /// The household member this income belongs to, if any.
    pub income_earner_name: Option<String>,
}

/// A top-level category for classifying expenses (e.g., 'Food & Dining').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    /// The category's ID in the application database.
    pub id: CategoryId,
    /// The category's name, unique across expense categories.
    pub name: CategoryName,
    /// An optional free-form description.
    pub description: Option<String>,
}

/// A second-level expense category (e.g., 'Grocery' under 'Food & Dining').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseSubcategory {
    /// The subcategory's ID in the application database.
    pub id: SubcategoryId,
    /// The subcategory's name.
    pub name: CategoryName,
    /// The parent expense category.
    pub category_id: CategoryId,
}

#[cfg(test)]
mod category_name_tests {
    use crate::{Error, category::CategoryName};

    #[test]
    fn new_fails_on_empty_string() {
        let name = CategoryName::new("");

        assert_eq!(name, Err(Error::EmptyName));
    }

    #[test]
    fn new_fails_on_just_whitespace() {
        let name = CategoryName::new("\n\t \r");

        assert_eq!(name, Err(Error::EmptyName));
    }

    #[test]
    fn new_trims_surrounding_whitespace() {
        let name = CategoryName::new("  Food & Dining ").unwrap();

        assert_eq!(name.as_ref(), "Food & Dining");
    }

    #[test]
    fn new_succeeds_on_non_empty_string() {
        let name = CategoryName::new("🔥");

        assert!(name.is_ok())
    }
}
