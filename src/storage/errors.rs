use crate::models::Transaction;
use crate::types::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate transaction [{name}] at [{date_time}]")]
    DuplicateTransaction {
        name: String,
        date_time: String
    },
    #[error("Transaction [{name}] at [{date_time}] was not found")]
    TransactionNotFound {
        name: String,
        date_time: String
    },
    #[error("Transaction store is full, capacity is [{capacity}]")]
    CapacityExceeded {
        capacity: usize
    }
}

impl StoreError {
    pub fn duplicate_transaction(tx: &Transaction) -> Self {
        Self::DuplicateTransaction {
            name: tx.name().to_string(),
            date_time: tx.date_time().to_string()
        }
    }

    pub fn transaction_not_found(tx: &Transaction) -> Self {
        Self::TransactionNotFound {
            name: tx.name().to_string(),
            date_time: tx.date_time().to_string()
        }
    }

    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Persistence error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Persistence error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Persistence error: Invalid budget in [{path}]: {source}")]
    InvalidBudget {
        path: String,
        source: ValidationError
    }
}
