use crate::filters::KeywordPredicate;
use crate::models::Transaction;
use crate::storage::{StoreError, TransactionStore};
use crate::summary::{has_expenses, sum_by_category, sum_by_month, BudgetTracker};
use crate::types::{Amount, Category, YearMonth};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The session's single owner of transactions, the active filter and the budget.
///
/// The filtered list is never cached: every call to `filtered_transactions`
/// re-applies the current predicate to the store as it is right now.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    store: TransactionStore,
    budget: BudgetTracker,
    filter: KeywordPredicate
}

impl ModelManager {
    pub fn new(store: TransactionStore) -> Self {
        Self {
            store,
            budget: BudgetTracker::new(),
            filter: KeywordPredicate::new()
        }
    }

    /// Replaces every stored transaction, e.g. after loading from disk.
    pub fn reset_data(&mut self, transactions: Vec<Transaction>) -> Result<(), StoreError> {
        self.store.reset_data(transactions)
            .inspect_err(|error| warn!("{error}"))
    }

    /// Adds a transaction and resets the filter so the new entry is visible.
    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), StoreError> {
        self.store.add(transaction)
            .inspect_err(|error| warn!("{error}"))?;
        self.filter = KeywordPredicate::new();

        Ok(())
    }

    pub fn delete_transaction(&mut self, target: &Transaction) -> Result<(), StoreError> {
        self.store.remove(target)
            .inspect_err(|error| warn!("{error}"))
    }

    pub fn set_transaction(&mut self, target: &Transaction, edited: Transaction) -> Result<(), StoreError> {
        self.store.set_transaction(target, edited)
            .inspect_err(|error| warn!("{error}"))
    }

    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.as_slice()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn update_filter(&mut self, predicate: KeywordPredicate) {
        if predicate.is_empty() {
            debug!("Filter cleared");
        } else {
            debug!("Filter updated: {predicate:?}");
        }

        self.filter = predicate;
    }

    pub fn filtered_transactions(&self) -> Vec<&Transaction> {
        self.store.as_slice()
            .iter()
            .filter(|transaction| self.filter.test(transaction))
            .collect()
    }

    pub fn expense_summary_per_category(&self) -> BTreeMap<Category, Amount> {
        sum_by_category(self.store.as_slice())
    }

    pub fn expense_summary_per_month(&self) -> BTreeMap<YearMonth, Amount> {
        sum_by_month(self.store.as_slice())
    }

    pub fn has_expenses(&self) -> bool {
        has_expenses(self.store.as_slice())
    }

    pub fn set_budget(&mut self, budget: Amount) {
        self.budget.set_budget(budget);
    }

    pub fn clear_budget(&mut self) {
        self.budget.clear_budget();
    }

    pub fn budget(&self) -> Option<Amount> {
        self.budget.budget()
    }
}
