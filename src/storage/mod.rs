mod csv_storage;
mod errors;
mod transaction_store;

use crate::models::Transaction;
use crate::types::Amount;

pub use csv_storage::CsvStorage;
pub use errors::{PersistenceError, StoreError};
pub use transaction_store::{TransactionStore, DEFAULT_CAPACITY};

/// Where a session's transactions and budget live between runs.
pub trait Storage {
    fn load_all(&self) -> Result<Vec<Transaction>, PersistenceError>;
    fn save_all(&self, transactions: &[Transaction]) -> Result<(), PersistenceError>;
    fn load_budget(&self) -> Result<Option<Amount>, PersistenceError>;
    fn save_budget(&self, budget: Option<Amount>) -> Result<(), PersistenceError>;
}
