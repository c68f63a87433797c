//! # Domain Module
//!
//! Business logic for the courier cash ledger. This layer knows nothing
//! about HTTP or the CSV files; it works against the storage traits.
//!
//! ## Module Organization
//!
//! - **message_parser**: Turns a pasted order message into a ledger entry
//! - **entry_validator**: Business rules an entry must pass before storage
//! - **entry_service**: Process, list and delete ledger entries
//! - **stats_service**: Per-rider and per-payment-method daily aggregates
//! - **balance_service**: Running cash balance across a day's ledger
//! - **auth_service**: Credential check for the login gate

pub mod auth_service;
pub mod balance_service;
pub mod commands;
pub mod entry_service;
pub mod entry_validator;
pub mod message_parser;
pub mod models;
pub mod stats_service;

pub use auth_service::*;
pub use balance_service::*;
pub use commands::*;
pub use entry_service::*;
pub use stats_service::*;
