//! # Storage Module
//!
//! Data persistence for the courier ledger: the storage abstraction traits
//! and the CSV backend that keeps one file per calendar date.

pub mod csv;
pub mod traits;

pub use csv::CsvConnection;
pub use traits::{Connection, LedgerStorage};
