use crate::models::{Transaction, TransactionRecord};
use crate::storage::errors::PersistenceError;
use crate::storage::Storage;
use crate::types::Amount;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::cell::Cell;
use std::ffi::OsString;
use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Keeps transactions in a CSV file and the budget in a one-line sidecar file.
///
/// Files are replaced whole: new contents go to a temporary sibling that is
/// renamed over the old file, so a failed save leaves the previous file intact.
/// Rows that could not be read on load are dropped by the next save, so the
/// file as it was is first copied to `<file>.bak`.
pub struct CsvStorage {
    path: PathBuf,
    budget_path: PathBuf,
    skipped_rows: Cell<usize>
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>, budget_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            budget_path: budget_path.into(),
            skipped_rows: Cell::new(0)
        }
    }

    pub fn backup_path(&self) -> PathBuf {
        let mut path = OsString::from(self.path.as_os_str());
        path.push(".bak");
        PathBuf::from(path)
    }

    fn backup_before_dropping_rows(&self) -> Result<(), PersistenceError> {
        let skipped = self.skipped_rows.get();

        if skipped > 0 {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup)?;
            self.skipped_rows.set(0);
            warn!("[{skipped}] unreadable rows from [{}] are not saved back, the previous file is kept at [{}]",
                self.path.display(), backup.display());
        }

        Ok(())
    }
}

impl Storage for CsvStorage {
    fn load_all(&self) -> Result<Vec<Transaction>, PersistenceError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                info!("No data file at [{}], starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into())
        };

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut transactions = Vec::new();
        let mut skipped = 0;

        for result in reader.deserialize::<TransactionRecord>() {
            match result {
                Ok(record) => match Transaction::try_from(record) {
                    Ok(transaction) => transactions.push(transaction),
                    Err(error) => {
                        warn!("Skipping invalid transaction row: {error}");
                        skipped += 1;
                    }
                },
                Err(error) => {
                    warn!("CSV deserialization error: {error}");
                    skipped += 1;
                }
            }
        }

        self.skipped_rows.set(skipped);

        debug!("Loaded [{}] transactions from [{}]", transactions.len(), self.path.display());

        Ok(transactions)
    }

    fn save_all(&self, transactions: &[Transaction]) -> Result<(), PersistenceError> {
        self.backup_before_dropping_rows()?;

        replace_file(&self.path, |file| {
            let mut writer = WriterBuilder::new().from_writer(BufWriter::new(file.as_file_mut()));

            for transaction in transactions {
                writer.serialize(TransactionRecord::from(transaction))?;
            }

            writer.flush()?;
            Ok(())
        })?;

        debug!("Saved [{}] transactions to [{}]", transactions.len(), self.path.display());

        Ok(())
    }

    fn load_budget(&self) -> Result<Option<Amount>, PersistenceError> {
        let content = match fs::read_to_string(&self.budget_path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into())
        };

        Amount::from_str(&content)
            .map(Some)
            .map_err(|source| PersistenceError::InvalidBudget {
                path: self.budget_path.display().to_string(),
                source
            })
    }

    fn save_budget(&self, budget: Option<Amount>) -> Result<(), PersistenceError> {
        match budget {
            Some(amount) => replace_file(&self.budget_path, |file| {
                writeln!(file, "{amount}")?;
                Ok(())
            })?,
            None => match fs::remove_file(&self.budget_path) {
                Ok(()) => {},
                Err(error) if error.kind() == ErrorKind::NotFound => {},
                Err(error) => return Err(error.into())
            }
        }

        Ok(())
    }
}

fn replace_file(path: &Path, write: impl FnOnce(&mut NamedTempFile) -> Result<(), PersistenceError>) -> Result<(), PersistenceError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };

    let mut file = NamedTempFile::new_in(directory)?;
    write(&mut file)?;
    file.persist(path).map_err(|error| error.error)?;

    Ok(())
}
