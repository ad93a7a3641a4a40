use crate::models::Transaction;
use crate::types::{Amount, Category, YearMonth};
use std::collections::BTreeMap;

/// Totals expense amounts per category. Income is ignored.
///
/// A transaction with several categories adds its full amount to each one,
/// so the category totals can add up to more than the overall expense total.
pub fn sum_by_category<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> BTreeMap<Category, Amount> {
    let mut totals = BTreeMap::new();

    for transaction in expenses(transactions) {
        for category in transaction.categories() {
            *totals.entry(category.clone()).or_insert_with(Amount::zero) += transaction.amount();
        }
    }

    totals
}

/// Totals expense amounts per calendar month of their date time. Income is ignored.
pub fn sum_by_month<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> BTreeMap<YearMonth, Amount> {
    let mut totals = BTreeMap::new();

    for transaction in expenses(transactions) {
        *totals.entry(transaction.date_time().year_month()).or_insert_with(Amount::zero) += transaction.amount();
    }

    totals
}

pub fn has_expenses<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> bool {
    expenses(transactions).next().is_some()
}

fn expenses<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> impl Iterator<Item = &'a Transaction> {
    transactions.into_iter().filter(|transaction| transaction.is_expense())
}
