//! Path management for the per-date CSV ledger files.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Header written when a day's ledger file is created. Column order
/// mirrors the original spreadsheet, with card_last_digits persisted as a
/// tenth column so card aggregation survives restarts.
pub const LEDGER_HEADER: [&str; 10] = [
    "name",
    "phone",
    "delivery_address",
    "fare",
    "fare_paid_online",
    "cash",
    "online",
    "credit_card",
    "rider",
    "card_last_digits",
];

/// CsvConnection manages file paths and ensures a ledger file exists for
/// each calendar date.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Path of the ledger file for `date`: `<base>/<DD-MM-YYYY>.csv`.
    pub fn ledger_file_path(&self, date: NaiveDate) -> PathBuf {
        self.base_directory
            .join(format!("{}.csv", date.format("%d-%m-%Y")))
    }

    /// Whether a ledger exists for `date`. Reading a missing ledger is not
    /// an error, but callers sometimes want to know.
    pub fn ledger_exists(&self, date: NaiveDate) -> bool {
        self.ledger_file_path(date).exists()
    }

    /// Create the date's ledger file with its header if it does not exist.
    pub fn ensure_ledger_file_exists(&self, date: NaiveDate) -> Result<()> {
        let file_path = self.ledger_file_path(date);

        if !file_path.exists() {
            let header = format!("{}\n", LEDGER_HEADER.join(","));
            fs::write(&file_path, header)?;
            info!("Created ledger file {}", file_path.display());
        }

        Ok(())
    }
}

impl crate::storage::traits::Connection for CsvConnection {
    type LedgerRepository = super::ledger_repository::LedgerRepository;

    fn create_ledger_repository(&self) -> Self::LedgerRepository {
        super::ledger_repository::LedgerRepository::new(self.clone())
    }
}
