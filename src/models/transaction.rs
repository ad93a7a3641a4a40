use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Amount, Categories, Category, DateTime, Location, Name, ValidationError};

const CATEGORY_SEPARATOR: &str = ";";

/// A single recorded money movement.
///
/// Every field is validated on the way in and cannot be changed afterwards;
/// an edit is a new `Transaction` swapped in for the old one. Two transactions
/// are equal when all of their fields are equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Transaction {
    name: Name,
    amount: Amount,
    transaction_type: TransactionType,
    categories: Categories,
    date_time: DateTime,
    location: Location
}

impl Transaction {
    pub fn new(
        name: Name,
        amount: Amount,
        transaction_type: TransactionType,
        categories: Categories,
        date_time: DateTime,
        location: Location
    ) -> Self {
        Self {
            name,
            amount,
            transaction_type,
            categories,
            date_time,
            location
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn categories(&self) -> &Categories {
        &self.categories
    }

    pub fn date_time(&self) -> &DateTime {
        &self.date_time
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// Represents a single row of the transactions CSV file.
///
/// Fields are kept as raw text and only become a `Transaction` through
/// `TryFrom`, which runs the value type validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    #[serde(default)]
    pub categories: String,
    #[serde(rename = "datetime")]
    pub date_time: String,
    pub location: String
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = ValidationError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let categories = record.categories
            .split(CATEGORY_SEPARATOR)
            .filter(|value| !value.trim().is_empty())
            .map(Category::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Transaction::new(
            record.name.parse()?,
            record.amount.parse()?,
            record.transaction_type.parse()?,
            Categories::try_from(categories)?,
            record.date_time.parse()?,
            record.location.parse()?
        ))
    }
}

impl From<&Transaction> for TransactionRecord {
    fn from(transaction: &Transaction) -> Self {
        let categories: Vec<&str> = transaction.categories.iter().map(Category::as_str).collect();

        Self {
            name: transaction.name.to_string(),
            amount: transaction.amount.to_string(),
            transaction_type: transaction.transaction_type.as_str().to_lowercase(),
            categories: categories.join(CATEGORY_SEPARATOR),
            date_time: transaction.date_time.original_text().to_string(),
            location: transaction.location.to_string()
        }
    }
}
