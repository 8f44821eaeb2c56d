// config.rs

use std::env;
use std::path::PathBuf;

pub const DEFAULT_LOGGING_PATH: &str = "logging/app.log";
pub const DEFAULT_CSV_PATH: &str = "data/operations_log.csv";

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Config {
    /// Process log file (`LOGGING_PATH`).
    pub logging_path: PathBuf,
    /// Audit CSV of successful calculations (`CSV_PATH`).
    pub csv_path: PathBuf,
    /// Readline recall file (`HISTFILE`); unset disables it.
    pub histfile: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging_path: PathBuf::from(DEFAULT_LOGGING_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            histfile: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        let defaults = Self::default();
        Self {
            logging_path: var("LOGGING_PATH").unwrap_or(defaults.logging_path),
            csv_path: var("CSV_PATH").unwrap_or(defaults.csv_path),
            histfile: var("HISTFILE"),
        }
    }
}
