//! # Storage Traits
//!
//! Abstraction over the per-date ledger store so the domain layer does not
//! depend on the CSV implementation. Operations are synchronous; the tool
//! is single-operator, request-response.

use anyhow::Result;
use chrono::NaiveDate;

use crate::domain::models::entry::LedgerEntry;

/// Interface to one day-keyed ledger store.
///
/// A date with no ledger file reads as an empty ledger, never an error.
/// Positions are 1-based insertion order.
pub trait LedgerStorage: Send + Sync {
    /// Append an entry to the given date's ledger, creating it on first
    /// write. The existing state and the new entry are both in memory
    /// before anything is written.
    fn append_entry(&self, date: NaiveDate, entry: &LedgerEntry) -> Result<()>;

    /// All entries for the date in insertion order.
    fn read_entries(&self, date: NaiveDate) -> Result<Vec<LedgerEntry>>;

    /// The last `n` entries in insertion order, plus the total count.
    fn last_entries(&self, date: NaiveDate, n: usize) -> Result<(Vec<LedgerEntry>, usize)>;

    /// Delete the entry at 1-based `position`. Only the most recent 10
    /// entries are deletable; violations surface as
    /// [`crate::domain::models::entry::DeleteEntryError`] inside the
    /// anyhow error. Returns the removed entry.
    fn delete_entry(&self, date: NaiveDate, position: usize) -> Result<LedgerEntry>;
}

/// Factory trait for storage connections, letting services stay generic
/// over the backing store.
pub trait Connection: Send + Sync + Clone {
    type LedgerRepository: LedgerStorage + Clone;

    fn create_ledger_repository(&self) -> Self::LedgerRepository;
}
