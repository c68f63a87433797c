//! CSV-based ledger repository.
//!
//! One file per calendar date. Every mutation is read-modify-write over
//! the whole file: the current entries and the change are in memory before
//! anything is written back, so a failed read never commits a partial
//! write.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::{Reader, Writer};
use log::info;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::{CsvConnection, LEDGER_HEADER};
use crate::domain::models::entry::{DeleteEntryError, LedgerEntry, Rider};
use crate::storage::traits::LedgerStorage;

/// Entries newer than `count - DELETE_WINDOW` are the only deletable ones.
const DELETE_WINDOW: usize = 10;

#[derive(Clone)]
pub struct LedgerRepository {
    connection: CsvConnection,
}

impl LedgerRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the whole ledger for a date. A missing file is an empty
    /// ledger.
    fn read_ledger(&self, date: NaiveDate) -> Result<Vec<LedgerEntry>> {
        let file_path = self.connection.ledger_file_path(date);
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)
            .with_context(|| format!("failed to open ledger file {}", file_path.display()))?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut entries = Vec::new();
        for result in csv_reader.records() {
            let record = result
                .with_context(|| format!("corrupt ledger file {}", file_path.display()))?;

            // Phone stays text exactly as stored; rider strings were
            // lowercased on write.
            let rider: Rider = record
                .get(8)
                .unwrap_or("")
                .parse()
                .with_context(|| format!("corrupt rider column in {}", file_path.display()))?;

            entries.push(LedgerEntry {
                name: record.get(0).unwrap_or("").to_string(),
                phone: record.get(1).unwrap_or("").to_string(),
                delivery_address: record.get(2).unwrap_or("").to_string(),
                fare: record.get(3).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                fare_paid_online: record.get(4).unwrap_or("no") == "yes",
                cash: record.get(5).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                online: record.get(6).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                credit_card: record.get(7).unwrap_or("0").parse::<f64>().unwrap_or(0.0),
                rider,
                card_last_digits: record.get(9).unwrap_or("").to_string(),
            });
        }

        Ok(entries)
    }

    /// Write the whole ledger for a date back to its file.
    fn write_ledger(&self, date: NaiveDate, entries: &[LedgerEntry]) -> Result<()> {
        let file_path = self.connection.ledger_file_path(date);

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)
            .with_context(|| format!("failed to write ledger file {}", file_path.display()))?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(LEDGER_HEADER)?;

        for entry in entries {
            csv_writer.write_record(&[
                entry.name.as_str(),
                entry.phone.as_str(),
                entry.delivery_address.as_str(),
                &entry.fare.to_string(),
                if entry.fare_paid_online { "yes" } else { "no" },
                &entry.cash.to_string(),
                &entry.online.to_string(),
                &entry.credit_card.to_string(),
                entry.rider.as_str(),
                entry.card_last_digits.as_str(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl LedgerStorage for LedgerRepository {
    fn append_entry(&self, date: NaiveDate, entry: &LedgerEntry) -> Result<()> {
        self.connection.ensure_ledger_file_exists(date)?;

        let mut entries = self.read_ledger(date)?;
        entries.push(entry.clone());
        self.write_ledger(date, &entries)?;

        info!(
            "Appended entry for '{}' to ledger {} ({} entries)",
            entry.name,
            date.format("%d-%m-%Y"),
            entries.len()
        );
        Ok(())
    }

    fn read_entries(&self, date: NaiveDate) -> Result<Vec<LedgerEntry>> {
        self.read_ledger(date)
    }

    fn last_entries(&self, date: NaiveDate, n: usize) -> Result<(Vec<LedgerEntry>, usize)> {
        let entries = self.read_ledger(date)?;
        let count = entries.len();
        let tail = entries[count.saturating_sub(n)..].to_vec();
        Ok((tail, count))
    }

    fn delete_entry(&self, date: NaiveDate, position: usize) -> Result<LedgerEntry> {
        let mut entries = self.read_ledger(date)?;
        let count = entries.len();

        if position < 1 || position > count {
            return Err(DeleteEntryError::OutOfRange { position, count }.into());
        }
        if position + DELETE_WINDOW <= count {
            return Err(DeleteEntryError::OutsideWindow { position, count }.into());
        }

        let removed = entries.remove(position - 1);
        self.write_ledger(date, &entries)?;

        info!(
            "Deleted entry {} of {} from ledger {}",
            position,
            count,
            date.format("%d-%m-%Y")
        );
        Ok(removed)
    }
}
