//! CSV implementation of the ledger store: one file per calendar date.

pub mod connection;
pub mod ledger_repository;
#[cfg(test)]
pub mod test_utils;

pub use connection::CsvConnection;
pub use ledger_repository::LedgerRepository;
