use crate::types::errors::ValidationError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const NAME_MAX_LENGTH: usize = 500;
pub const LOCATION_MAX_LENGTH: usize = 500;

/// The label a user gives a transaction, e.g. "Lunch at canteen".
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let value = bounded_text("Name", value, NAME_MAX_LENGTH)?;

        if value.chars().any(char::is_control) {
            return Err(ValidationError::InvalidCharacters { field: "Name", value });
        }

        Ok(Name(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Where a transaction took place. Free text.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Location(String);

impl Location {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        bounded_text("Location", value, LOCATION_MAX_LENGTH).map(Location)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Blank { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(value.to_string())
}

impl Display for Name {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl Display for Location {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Name::new(value)
    }
}

impl FromStr for Location {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Location::new(value)
    }
}
