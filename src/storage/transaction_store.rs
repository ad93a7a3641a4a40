use crate::models::Transaction;
use crate::storage::errors::StoreError;
use std::collections::HashSet;
use tracing::debug;

pub const DEFAULT_CAPACITY: usize = 100_000;

/// The canonical, duplicate-free list of transactions for a session.
///
/// Order is insertion order, except that a replaced transaction keeps the
/// position of the one it replaced. Every failed mutation leaves the store
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    capacity: usize
}

impl TransactionStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            capacity: DEFAULT_CAPACITY
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn contains(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    pub fn is_full(&self) -> bool {
        self.transactions.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Read-only view of the current contents in order.
    pub fn as_slice(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Appends a transaction.
    ///
    /// # Errors
    /// - `DuplicateTransaction` if an equal transaction is already stored.
    /// - `CapacityExceeded` if the store is full.
    pub fn add(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        if self.contains(&transaction) {
            return Err(StoreError::duplicate_transaction(&transaction))
        }

        if self.is_full() {
            return Err(StoreError::capacity_exceeded(self.capacity))
        }

        debug!("Transaction [{}] added", transaction.name());
        self.transactions.push(transaction);

        Ok(())
    }

    /// Removes the transaction equal to `transaction`.
    pub fn remove(&mut self, transaction: &Transaction) -> Result<(), StoreError> {
        let index = self.position(transaction)?;
        self.transactions.remove(index);

        debug!("Transaction [{}] removed", transaction.name());

        Ok(())
    }

    /// Replaces `target` with `replacement` at the same position.
    ///
    /// Replacing a transaction with an equal one is allowed; replacing it with
    /// one equal to a *different* stored transaction is not.
    pub fn set_transaction(&mut self, target: &Transaction, replacement: Transaction) -> Result<(), StoreError> {
        let index = self.position(target)?;

        if target != &replacement && self.contains(&replacement) {
            return Err(StoreError::duplicate_transaction(&replacement))
        }

        debug!("Transaction [{}] replaced by [{}]", target.name(), replacement.name());
        self.transactions[index] = replacement;

        Ok(())
    }

    /// Replaces the whole contents with `transactions`.
    ///
    /// The new contents are validated first; on error nothing changes.
    pub fn reset_data(&mut self, transactions: Vec<Transaction>) -> Result<(), StoreError> {
        if let Some(duplicate) = first_duplicate(&transactions) {
            return Err(StoreError::duplicate_transaction(duplicate))
        }

        if transactions.len() > self.capacity {
            return Err(StoreError::capacity_exceeded(self.capacity))
        }

        debug!("Transaction store reset with [{}] transactions", transactions.len());
        self.transactions = transactions;

        Ok(())
    }

    fn position(&self, transaction: &Transaction) -> Result<usize, StoreError> {
        self.transactions.iter()
            .position(|stored| stored == transaction)
            .ok_or_else(|| StoreError::transaction_not_found(transaction))
    }
}

fn first_duplicate(transactions: &[Transaction]) -> Option<&Transaction> {
    let mut seen = HashSet::with_capacity(transactions.len());
    transactions.iter().find(|transaction| !seen.insert(*transaction))
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}
