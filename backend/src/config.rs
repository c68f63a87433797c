//! Environment-driven configuration.
//!
//! Every setting has a default so the tool runs with no setup at all;
//! defaulted credentials are logged so an operator notices before exposing
//! the server anywhere.

use log::warn;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "ledger-data";
pub const DEFAULT_OPENING_BALANCE: f64 = 7000.0;
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the per-date ledger CSV files.
    pub data_dir: PathBuf,
    /// Cash on hand at the start of every day.
    pub opening_balance: f64,
    pub username: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var("LEDGER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let opening_balance = match env::var("LEDGER_OPENING_BALANCE") {
            Ok(raw) => match raw.parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    warn!(
                        "LEDGER_OPENING_BALANCE '{}' is not a number, using {}",
                        raw, DEFAULT_OPENING_BALANCE
                    );
                    DEFAULT_OPENING_BALANCE
                }
            },
            Err(_) => DEFAULT_OPENING_BALANCE,
        };

        let username = env::var("LEDGER_USERNAME").unwrap_or_else(|_| {
            warn!("LEDGER_USERNAME not set, using default credentials");
            DEFAULT_USERNAME.to_string()
        });
        let password =
            env::var("LEDGER_PASSWORD").unwrap_or_else(|_| DEFAULT_PASSWORD.to_string());

        Self {
            data_dir,
            opening_balance,
            username,
            password,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            opening_balance: DEFAULT_OPENING_BALANCE,
            username: DEFAULT_USERNAME.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
        }
    }
}
