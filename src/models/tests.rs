use super::{Transaction, TransactionRecord, TransactionType};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use anyhow::Result;

use crate::types::{Amount, Categories, Category, DateTime, Location, Name, ValidationError};

fn create_transaction(name: &str, amount: &str, transaction_type: TransactionType, categories: &[&str], date_time: &str, location: &str) -> Result<Transaction> {
    let categories = categories.iter()
        .map(|value| Category::new(value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Transaction::new(
        Name::new(name)?,
        Amount::from_str(amount)?,
        transaction_type,
        Categories::try_from(categories)?,
        DateTime::from_str(date_time)?,
        Location::new(location)?
    ))
}

fn hash_of(transaction: &Transaction) -> u64 {
    let mut hasher = DefaultHasher::new();
    transaction.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_accessors_return_constructed_values() -> Result<()> {
    let transaction = create_transaction("Lunch", "12.50", TransactionType::Expense, &["food", "work"], "18/12/2023 12:30", "Canteen")?;

    assert_eq!(transaction.name().as_str(), "Lunch");
    assert_eq!(transaction.amount(), Amount::from_str("12.5")?);
    assert_eq!(transaction.transaction_type(), TransactionType::Expense);
    assert_eq!(transaction.categories().iter().map(Category::as_str).collect::<Vec<_>>(), vec!["food", "work"]);
    assert_eq!(transaction.date_time().to_string(), "18/12/2023 12:30");
    assert_eq!(transaction.location().as_str(), "Canteen");
    assert!(transaction.is_expense());

    Ok(())
}

#[test]
fn test_equal_fields_produce_equal_transactions_and_hashes() -> Result<()> {
    let first = create_transaction("Lunch", "12.50", TransactionType::Expense, &["food"], "18/12/2023 12:30", "Canteen")?;
    let second = create_transaction("Lunch", "12.5", TransactionType::Expense, &["Food"], "2023-12-18 12:30", " Canteen ")?;

    assert_eq!(first, second);
    assert_eq!(hash_of(&first), hash_of(&second));

    Ok(())
}

#[test]
fn test_any_differing_field_produces_inequality() -> Result<()> {
    let base = create_transaction("Lunch", "12.50", TransactionType::Expense, &["food"], "18/12/2023 12:30", "Canteen")?;

    let variants = vec![
        create_transaction("Dinner", "12.50", TransactionType::Expense, &["food"], "18/12/2023 12:30", "Canteen")?,
        create_transaction("Lunch", "12.51", TransactionType::Expense, &["food"], "18/12/2023 12:30", "Canteen")?,
        create_transaction("Lunch", "12.50", TransactionType::Income, &["food"], "18/12/2023 12:30", "Canteen")?,
        create_transaction("Lunch", "12.50", TransactionType::Expense, &["work"], "18/12/2023 12:30", "Canteen")?,
        create_transaction("Lunch", "12.50", TransactionType::Expense, &["food", "work"], "18/12/2023 12:30", "Canteen")?,
        create_transaction("Lunch", "12.50", TransactionType::Expense, &["food"], "18/12/2023 12:31", "Canteen")?,
        create_transaction("Lunch", "12.50", TransactionType::Expense, &["food"], "18/12/2023 12:30", "Office")?,
    ];

    for variant in variants {
        assert_ne!(base, variant);
    }

    Ok(())
}

#[test]
fn test_category_order_is_part_of_equality() -> Result<()> {
    let food_first = create_transaction("Taxi", "20", TransactionType::Expense, &["food", "transport"], "01/03/2024 08:00", "-")?;
    let transport_first = create_transaction("Taxi", "20", TransactionType::Expense, &["transport", "food"], "01/03/2024 08:00", "-")?;

    assert_ne!(food_first, transport_first);

    Ok(())
}

#[test]
fn test_transaction_type_parses_case_insensitively() -> Result<()> {
    assert_eq!(TransactionType::from_str("EXPENSE")?, TransactionType::Expense);
    assert_eq!(TransactionType::from_str(" income ")?, TransactionType::Income);
    assert!(matches!(TransactionType::from_str("transfer"), Err(ValidationError::InvalidType(_))));
    assert_eq!(TransactionType::Income.to_string(), "Income");

    Ok(())
}

#[test]
fn test_record_conversion_keeps_original_date_time_text() -> Result<()> {
    let record = TransactionRecord {
        name: "Salary".to_string(),
        amount: "3000".to_string(),
        transaction_type: "income".to_string(),
        categories: "work;monthly".to_string(),
        date_time: "2024-03-01 09:00".to_string(),
        location: "Office".to_string()
    };

    let transaction = Transaction::try_from(record)?;

    assert_eq!(transaction.transaction_type(), TransactionType::Income);
    assert_eq!(transaction.categories().len(), 2);

    let written = TransactionRecord::from(&transaction);

    assert_eq!(written.amount, "3000.00");
    assert_eq!(written.transaction_type, "income");
    assert_eq!(written.categories, "work;monthly");
    assert_eq!(written.date_time, "2024-03-01 09:00");

    Ok(())
}

#[test]
fn test_record_with_invalid_field_is_rejected() {
    let record = TransactionRecord {
        name: "Refund".to_string(),
        amount: "-5.00".to_string(),
        transaction_type: "income".to_string(),
        categories: String::new(),
        date_time: "01/03/2024 09:00".to_string(),
        location: "-".to_string()
    };

    assert!(matches!(Transaction::try_from(record), Err(ValidationError::NegativeAmount(_))));
}
