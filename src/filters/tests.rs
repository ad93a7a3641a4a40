use super::KeywordPredicate;
use crate::models::{Transaction, TransactionType};
use crate::types::{Amount, Categories, Category, DateTime, Location, Name};
use anyhow::Result;
use std::str::FromStr;

fn create_transaction(name: &str, amount: &str, transaction_type: TransactionType, categories: &[&str], location: &str) -> Result<Transaction> {
    let categories = categories.iter()
        .map(|value| Category::new(value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Transaction::new(
        Name::new(name)?,
        Amount::from_str(amount)?,
        transaction_type,
        Categories::try_from(categories)?,
        DateTime::from_str("2023-12-18 18:18")?,
        Location::new(location)?
    ))
}

#[test]
fn test_empty_predicate_matches_everything() -> Result<()> {
    let predicate = KeywordPredicate::new();

    assert!(predicate.is_empty());
    assert!(predicate.test(&create_transaction("Lunch", "10", TransactionType::Expense, &[], "Canteen")?));
    assert!(predicate.test(&create_transaction("Salary", "3000", TransactionType::Income, &["work"], "Office")?));

    Ok(())
}

#[test]
fn test_category_keyword_matches_any_owned_category() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_category_keyword("Food");

    assert!(predicate.test(&create_transaction("Taxi", "20", TransactionType::Expense, &["food", "transport"], "-")?));
    assert!(!predicate.test(&create_transaction("Bus", "2", TransactionType::Expense, &["transport"], "-")?));

    Ok(())
}

#[test]
fn test_keywords_are_and_across_fields() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_name_keyword("lunch").add_type_keyword("income");

    assert!(!predicate.test(&create_transaction("Lunch", "10", TransactionType::Expense, &[], "-")?));
    assert!(predicate.test(&create_transaction("Lunch", "10", TransactionType::Income, &[], "-")?));

    Ok(())
}

#[test]
fn test_keywords_are_or_within_a_field() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_location_keyword("canteen").add_location_keyword("Home");

    assert!(predicate.test(&create_transaction("Lunch", "10", TransactionType::Expense, &[], "Canteen")?));
    assert!(predicate.test(&create_transaction("Dinner", "12", TransactionType::Expense, &[], "home")?));
    assert!(!predicate.test(&create_transaction("Snack", "3", TransactionType::Expense, &[], "Office")?));

    Ok(())
}

#[test]
fn test_name_keyword_requires_whole_name() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_name_keyword("Lunch");

    assert!(predicate.test(&create_transaction("LUNCH", "10", TransactionType::Expense, &[], "-")?));
    assert!(!predicate.test(&create_transaction("Lunch at canteen", "10", TransactionType::Expense, &[], "-")?));

    Ok(())
}

#[test]
fn test_amount_keyword_matches_two_decimal_form() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_amount_keyword(&Amount::from_str("12.5")?.to_string());

    assert!(predicate.test(&create_transaction("Lunch", "12.50", TransactionType::Expense, &[], "-")?));
    assert!(!predicate.test(&create_transaction("Lunch", "12.05", TransactionType::Expense, &[], "-")?));

    let mut raw = KeywordPredicate::new();
    raw.add_amount_keyword("12.5");

    assert!(!raw.test(&create_transaction("Lunch", "12.50", TransactionType::Expense, &[], "-")?));

    Ok(())
}

#[test]
fn test_date_time_keyword_matches_display_form() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_date_time_keyword(&DateTime::from_str("18-12-2023 18:18")?.to_string());

    assert!(predicate.test(&create_transaction("Lunch", "10", TransactionType::Expense, &[], "-")?));

    let mut other = KeywordPredicate::new();
    other.add_date_time_keyword("19/12/2023 18:18");

    assert!(!other.test(&create_transaction("Lunch", "10", TransactionType::Expense, &[], "-")?));

    Ok(())
}

#[test]
fn test_duplicate_keywords_are_harmless() -> Result<()> {
    let mut predicate = KeywordPredicate::new();
    predicate.add_type_keyword("Expense").add_type_keyword("EXPENSE");

    assert!(predicate.test(&create_transaction("Lunch", "10", TransactionType::Expense, &[], "-")?));
    assert!(!predicate.test(&create_transaction("Salary", "10", TransactionType::Income, &[], "-")?));

    Ok(())
}
