//! Command line subcommands and their handlers.
//!
//! Raw flag values are parsed through the value types here, so the model only
//! ever sees validated data. Every handler writes its output to `output` and
//! persists through `storage` after a successful mutation.


use std::io::Write;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use tracing::info;

use crate::display::{format_amount, format_budget, format_transaction_row};
use crate::engine::ModelManager;
use crate::filters::KeywordPredicate;
use crate::models::{Transaction, TransactionType};
use crate::storage::Storage;
use crate::types::{Amount, Categories, Category, DateTime, Location, Name};

const DEFAULT_LOCATION: &str = "-";

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List transactions, optionally filtered by keywords
    List(FilterArgs),
    /// Record a new transaction
    Add(NewTransactionArgs),
    /// Delete the transaction at INDEX of the unfiltered list
    Delete {
        /// 1-based position in the unfiltered list
        index: usize
    },
    /// Replace fields of the transaction at INDEX of the unfiltered list
    Edit {
        /// 1-based position in the unfiltered list
        index: usize,
        #[command(flatten)]
        changes: EditArgs
    },
    /// Show expense totals per category and per month
    Summary,
    /// Manage the spending budget
    #[command(subcommand)]
    Budget(BudgetCommands)
}

/// Keywords for `list`. Repeating a flag matches any of its values; different
/// flags must all match.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    #[arg(short, long)]
    pub name: Vec<String>,
    #[arg(short, long)]
    pub amount: Vec<String>,
    #[arg(short, long)]
    pub category: Vec<String>,
    #[arg(short, long)]
    pub location: Vec<String>,
    #[arg(short, long)]
    pub datetime: Vec<String>,
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<String>
}

#[derive(Debug, Args)]
pub struct NewTransactionArgs {
    #[arg(short, long)]
    pub name: String,
    #[arg(short, long)]
    pub amount: String,
    /// expense or income
    #[arg(short = 't', long = "type")]
    pub transaction_type: String,
    #[arg(short, long)]
    pub category: Vec<String>,
    /// e.g. "18/12/2023 18:18"
    #[arg(short, long)]
    pub datetime: String,
    #[arg(short, long)]
    pub location: Option<String>
}

#[derive(Debug, Default, Args)]
pub struct EditArgs {
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub amount: Option<String>,
    #[arg(short = 't', long = "type")]
    pub transaction_type: Option<String>,
    /// Replaces all categories when given
    #[arg(short, long)]
    pub category: Vec<String>,
    #[arg(short, long)]
    pub datetime: Option<String>,
    #[arg(short, long)]
    pub location: Option<String>
}

#[derive(Debug, Subcommand)]
pub enum BudgetCommands {
    /// Set the budget to AMOUNT
    Set {
        amount: String
    },
    /// Remove the budget
    Clear,
    /// Print the current budget
    Show
}

pub fn execute<S: Storage>(command: Commands, model: &mut ModelManager, storage: &S, output: &mut impl Write) -> Result<()> {
    match command {
        Commands::List(filter) => {
            model.update_filter(build_predicate(&filter)?);
            write_transactions(model, output)
        },
        Commands::Add(args) => {
            if model.is_full() {
                bail!("Cannot add [{}]: the transaction store is full", args.name);
            }

            let transaction = build_transaction(&args)?;
            let row = format_transaction_row(model.len() + 1, &transaction);
            model.add_transaction(transaction)?;
            storage.save_all(model.transactions())?;
            writeln!(output, "Added: {row}")?;
            Ok(())
        },
        Commands::Delete { index } => {
            let target = transaction_at(model, index)?;
            model.delete_transaction(&target)?;
            storage.save_all(model.transactions())?;
            writeln!(output, "Deleted: {}", format_transaction_row(index, &target))?;
            Ok(())
        },
        Commands::Edit { index, changes } => {
            let target = transaction_at(model, index)?;
            let edited = apply_edit(&target, &changes)?;
            model.set_transaction(&target, edited.clone())?;
            storage.save_all(model.transactions())?;
            writeln!(output, "Edited: {}", format_transaction_row(index, &edited))?;
            Ok(())
        },
        Commands::Summary => write_summary(model, output),
        Commands::Budget(budget) => {
            match budget {
                BudgetCommands::Set { amount } => {
                    model.set_budget(Amount::from_str(&amount)?);
                    storage.save_budget(model.budget())?;
                },
                BudgetCommands::Clear => {
                    model.clear_budget();
                    storage.save_budget(model.budget())?;
                },
                BudgetCommands::Show => {}
            }

            writeln!(output, "{}", format_budget(model.budget()))?;
            Ok(())
        }
    }
}

/// Parses every keyword through its value type before registering it, so
/// that e.g. `12.5` is matched as `12.50`.
pub fn build_predicate(filter: &FilterArgs) -> Result<KeywordPredicate> {
    let mut predicate = KeywordPredicate::new();

    for keyword in &filter.name {
        predicate.add_name_keyword(Name::new(keyword)?.as_str());
    }

    for keyword in &filter.amount {
        predicate.add_amount_keyword(&Amount::from_str(keyword)?.to_string());
    }

    for keyword in &filter.category {
        predicate.add_category_keyword(Category::new(keyword)?.as_str());
    }

    for keyword in &filter.location {
        predicate.add_location_keyword(Location::new(keyword)?.as_str());
    }

    for keyword in &filter.datetime {
        predicate.add_date_time_keyword(&DateTime::from_str(keyword)?.to_string());
    }

    if let Some(keyword) = &filter.transaction_type {
        predicate.add_type_keyword(TransactionType::from_str(keyword)?.as_str());
    }

    Ok(predicate)
}

fn build_transaction(args: &NewTransactionArgs) -> Result<Transaction> {
    Ok(Transaction::new(
        Name::new(&args.name)?,
        Amount::from_str(&args.amount)?,
        TransactionType::from_str(&args.transaction_type)?,
        parse_categories(&args.category)?,
        DateTime::from_str(&args.datetime)?,
        Location::new(args.location.as_deref().unwrap_or(DEFAULT_LOCATION))?
    ))
}

fn apply_edit(target: &Transaction, changes: &EditArgs) -> Result<Transaction> {
    let name = match &changes.name {
        Some(value) => Name::new(value)?,
        None => target.name().clone()
    };

    let amount = match &changes.amount {
        Some(value) => Amount::from_str(value)?,
        None => target.amount()
    };

    let transaction_type = match &changes.transaction_type {
        Some(value) => TransactionType::from_str(value)?,
        None => target.transaction_type()
    };

    let categories = if changes.category.is_empty() {
        target.categories().clone()
    } else {
        parse_categories(&changes.category)?
    };

    let date_time = match &changes.datetime {
        Some(value) => DateTime::from_str(value)?,
        None => target.date_time().clone()
    };

    let location = match &changes.location {
        Some(value) => Location::new(value)?,
        None => target.location().clone()
    };

    Ok(Transaction::new(name, amount, transaction_type, categories, date_time, location))
}

fn parse_categories(values: &[String]) -> Result<Categories> {
    let categories = values.iter()
        .map(|value| Category::new(value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Categories::try_from(categories)?)
}

fn transaction_at(model: &ModelManager, index: usize) -> Result<Transaction> {
    index.checked_sub(1)
        .and_then(|position| model.transactions().get(position))
        .cloned()
        .ok_or_else(|| anyhow!("Index [{index}] is out of range, there are {} transactions", model.len()))
}

fn write_transactions(model: &ModelManager, output: &mut impl Write) -> Result<()> {
    let transactions = model.filtered_transactions();

    if transactions.is_empty() {
        writeln!(output, "No transactions found")?;
        return Ok(());
    }

    for (position, transaction) in transactions.iter().enumerate() {
        writeln!(output, "{}", format_transaction_row(position + 1, transaction))?;
    }

    info!("Listed [{}] of [{}] transactions", transactions.len(), model.len());

    Ok(())
}

fn write_summary(model: &ModelManager, output: &mut impl Write) -> Result<()> {
    if !model.has_expenses() {
        writeln!(output, "No expenses recorded")?;
        writeln!(output, "{}", format_budget(model.budget()))?;
        return Ok(());
    }

    writeln!(output, "category,total")?;

    for (category, total) in model.expense_summary_per_category() {
        writeln!(output, "{},{}", category, format_amount(total))?;
    }

    writeln!(output, "month,total")?;

    for (year_month, total) in model.expense_summary_per_month() {
        writeln!(output, "{},{}", year_month, format_amount(total))?;
    }

    writeln!(output, "{}", format_budget(model.budget()))?;

    Ok(())
}
