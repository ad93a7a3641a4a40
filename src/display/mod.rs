//! Text formatting for transactions and summaries.
//!
//! The domain types only know their plain values; everything shown to a user
//! (currency symbol, sign, category hashtags) is added here.


use crate::models::{Transaction, TransactionType};
use crate::types::{Amount, Categories, Category};

const CURRENCY_SYMBOL: &str = "$";

/// Amount with its direction, e.g. `-$12.50` for an expense and `+$12.50` for income.
pub fn format_signed_amount(transaction: &Transaction) -> String {
    let polarity = match transaction.transaction_type() {
        TransactionType::Expense => "-",
        TransactionType::Income => "+"
    };

    format!("{polarity}{}", format_amount(transaction.amount()))
}

pub fn format_amount(amount: Amount) -> String {
    format!("{CURRENCY_SYMBOL}{amount}")
}

/// Categories as a single hashtag-led list, e.g. `#food, transport`. Empty for no categories.
pub fn format_categories(categories: &Categories) -> String {
    if categories.is_empty() {
        return String::new();
    }

    let joined = categories.iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!("#{joined}")
}

/// One list row, numbered from 1.
pub fn format_transaction_row(index: usize, transaction: &Transaction) -> String {
    format!(
        "{}. {} | {} | {} | {} | {}",
        index,
        transaction.name(),
        format_signed_amount(transaction),
        transaction.date_time(),
        transaction.location(),
        format_categories(transaction.categories())
    )
}

pub fn format_budget(budget: Option<Amount>) -> String {
    match budget {
        Some(amount) => format!("Budget: {}", format_amount(amount)),
        None => "Budget: not set".to_string()
    }
}
