
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

const BUDGET_EXTENSION: &str = ".budget";

/// Settings for one run, resolved from command line flags and the environment.
#[derive(Debug, Clone)]
pub struct Config {
    data_file: PathBuf,
    capacity: usize,
    log_level: LevelFilter
}

impl Config {
    pub fn new(data_file: PathBuf, capacity: usize, log_level: &str) -> Self {
        Self {
            data_file,
            capacity,
            log_level: parse_log_level(log_level)
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// The budget lives next to the data file, e.g. `transactions.csv.budget`.
    pub fn budget_path(&self) -> PathBuf {
        let mut path = OsString::from(self.data_file.as_os_str());
        path.push(BUDGET_EXTENSION);
        PathBuf::from(path)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
