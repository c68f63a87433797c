//! Domain-level command and query types
//!
//! These structs are used by services inside the domain layer and are
//! **not** exposed over the public API. The REST layer maps the DTOs in
//! the `shared` crate to these internal types.

pub mod entries {
    use chrono::NaiveDate;

    use crate::domain::models::entry::{LedgerEntry, Rider};

    /// Input for processing one pasted message into the day's ledger.
    #[derive(Debug, Clone)]
    pub struct ProcessMessageCommand {
        pub date: NaiveDate,
        pub message: String,
        pub rider: Rider,
        /// The operator's fare-paid-online choice; overrides whatever the
        /// message text said.
        pub fare_paid_online: bool,
    }

    /// Result of processing a message. `violations` is empty iff the
    /// entry was accepted and stored.
    #[derive(Debug, Clone)]
    pub struct ProcessMessageResult {
        pub entry: Option<LedgerEntry>,
        pub violations: Vec<String>,
        pub success_message: String,
    }

    impl ProcessMessageResult {
        pub fn is_accepted(&self) -> bool {
            self.violations.is_empty()
        }
    }

    /// Query for the most recent entries of one date.
    #[derive(Debug, Clone)]
    pub struct RecentEntriesQuery {
        pub date: NaiveDate,
        /// Defaults to 10 when unset.
        pub limit: Option<usize>,
    }

    /// Result of a recent-entries query.
    #[derive(Debug, Clone)]
    pub struct RecentEntriesResult {
        pub entries: Vec<LedgerEntry>,
        pub total_count: usize,
    }

    /// Input for deleting one entry by 1-based position.
    #[derive(Debug, Clone)]
    pub struct DeleteEntryCommand {
        pub date: NaiveDate,
        pub position: usize,
    }

    /// Result of a successful deletion.
    #[derive(Debug, Clone)]
    pub struct DeleteEntryResult {
        pub success_message: String,
    }
}

pub mod auth {
    /// Input for the login gate.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub username: String,
        pub password: String,
    }

    /// Result of a login attempt.
    #[derive(Debug, Clone)]
    pub struct LoginResult {
        pub success: bool,
        pub message: String,
    }
}
