mod commands;
mod config;
mod display;
mod engine;
mod filters;
mod models;
mod storage;
mod summary;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::commands::Commands;
use crate::config::Config;
use crate::engine::ModelManager;
use crate::storage::{CsvStorage, Storage, TransactionStore, DEFAULT_CAPACITY};

#[derive(Parser)]
#[command(
    name = "finance-tracker",
    version,
    about = "Record expenses and income, filter them by keyword and summarise spending"
)]
struct Cli {
    /// CSV file holding the transactions
    #[arg(long, global = true, env = "FINANCE_TRACKER_FILE", default_value = "transactions.csv")]
    file: PathBuf,

    /// Maximum number of transactions the file may hold
    #[arg(long, global = true, env = "FINANCE_TRACKER_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,

    /// error, warn, info, debug or trace
    #[arg(long, global = true, env = "FINANCE_TRACKER_LOG", default_value = "error")]
    log_level: String,

    #[command(subcommand)]
    command: Commands
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.file, cli.capacity, &cli.log_level);

    setup_logging(config.log_level());

    let storage = CsvStorage::new(config.data_file(), config.budget_path());
    let mut model = load_model(&config, &storage)?;

    let mut output = BufWriter::new(stdout().lock());
    commands::execute(cli.command, &mut model, &storage, &mut output)?;
    output.flush()?;

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries command output, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn load_model(config: &Config, storage: &impl Storage) -> Result<ModelManager> {
    let mut model = ModelManager::new(TransactionStore::new().with_capacity(config.capacity()));

    let transactions = storage.load_all()
        .with_context(|| format!("Could not read [{}]", config.data_file().display()))?;
    model.reset_data(transactions)
        .with_context(|| format!("Could not load [{}]", config.data_file().display()))?;

    if let Some(budget) = storage.load_budget()? {
        model.set_budget(budget);
    }

    info!("Loaded [{}] transactions from [{}]", model.len(), config.data_file().display());

    Ok(model)
}
