use crate::types::errors::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const CATEGORY_MAX_LENGTH: usize = 15;
pub const MAX_CATEGORIES: usize = 5;

/// A single lower-cased, alphanumeric tag such as `food` or `transport`.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Category(String);

impl Category {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::Blank { field: "Category" });
        }

        if value.chars().count() > CATEGORY_MAX_LENGTH {
            return Err(ValidationError::TooLong { field: "Category", max: CATEGORY_MAX_LENGTH });
        }

        if !value.chars().all(char::is_alphanumeric) {
            return Err(ValidationError::InvalidCharacters { field: "Category", value: value.to_string() });
        }

        Ok(Category(value.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::new(value)
    }
}

/// The ordered, duplicate-free set of categories attached to one transaction.
///
/// Insertion order is preserved. Rendering for display lives in `crate::display`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Categories(Vec<Category>);

impl Categories {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `category`, rejecting duplicates and anything past `MAX_CATEGORIES`.
    pub fn push(&mut self, category: Category) -> Result<(), ValidationError> {
        if self.contains(&category) {
            return Err(ValidationError::DuplicateCategory(category.0))
        }

        if self.0.len() >= MAX_CATEGORIES {
            return Err(ValidationError::TooManyCategories(MAX_CATEGORIES))
        }

        self.0.push(category);

        Ok(())
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.0.contains(category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Category>> for Categories {
    type Error = ValidationError;

    fn try_from(values: Vec<Category>) -> Result<Self, Self::Error> {
        let mut categories = Categories::new();

        for category in values {
            categories.push(category)?;
        }

        Ok(categories)
    }
}

impl<'a> IntoIterator for &'a Categories {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
