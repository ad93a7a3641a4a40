use crate::types::errors::ValidationError;
use chrono::{Datelike, NaiveDateTime};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

const ACCEPTED_FORMATS: [&str; 4] = [
    DISPLAY_FORMAT,
    "%d-%m-%Y %H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M"
];

/// A calendar date and time of day, minute resolution.
///
/// The text the value was parsed from is kept so that it can be written back
/// unchanged. Equality, ordering and hashing only look at the instant.
#[derive(Debug, Clone)]
pub struct DateTime {
    value: NaiveDateTime,
    original: String
}

impl DateTime {
    #[cfg(test)]
    pub fn new(value: NaiveDateTime) -> Self {
        Self {
            value,
            original: value.format(DISPLAY_FORMAT).to_string()
        }
    }

    /// The text this value was parsed from, or the display form if it was built directly.
    pub fn original_text(&self) -> &str {
        &self.original
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.value.year(),
            month: self.value.month()
        }
    }
}

impl PartialEq for DateTime {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DateTime {}

impl Hash for DateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for DateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl Display for DateTime {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.value.format(DISPLAY_FORMAT))
    }
}

impl FromStr for DateTime {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(ValidationError::Blank { field: "DateTime" });
        }

        ACCEPTED_FORMATS.iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|parsed| DateTime {
                value: parsed,
                original: value.to_string()
            })
            .ok_or_else(|| ValidationError::InvalidDateTime(value.to_string()))
    }
}

/// Grouping key for monthly summaries.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32
}

impl Display for YearMonth {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:04}-{:02}", self.year, self.month)
    }
}
