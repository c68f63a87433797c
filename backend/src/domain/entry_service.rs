//! Entry service: the process / recent / delete operations the data-entry
//! screen drives.

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::domain::commands::entries::{
    DeleteEntryCommand, DeleteEntryResult, ProcessMessageCommand, ProcessMessageResult,
    RecentEntriesQuery, RecentEntriesResult,
};
use crate::domain::{entry_validator, message_parser};
use crate::storage::{Connection, LedgerStorage};

/// Default size of the "last records" view.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

#[derive(Clone)]
pub struct EntryService<C: Connection> {
    ledger_repository: C::LedgerRepository,
}

impl<C: Connection> EntryService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let ledger_repository = connection.create_ledger_repository();
        Self { ledger_repository }
    }

    /// Parse, validate and append one pasted message.
    ///
    /// A rejected entry never reaches storage; its violations come back in
    /// the result instead of as an error, since rejection is an expected
    /// outcome of the operation.
    pub fn process_message(&self, command: ProcessMessageCommand) -> Result<ProcessMessageResult> {
        let mut entry = message_parser::parse_message(&command.message, command.rider);
        entry.fare_paid_online = command.fare_paid_online;

        let violations = entry_validator::validate(&entry);
        if !violations.is_empty() {
            warn!(
                "Rejected entry for ledger {}: {}",
                command.date.format("%d-%m-%Y"),
                violations.join("; ")
            );
            return Ok(ProcessMessageResult {
                entry: None,
                violations,
                success_message: String::new(),
            });
        }

        self.ledger_repository.append_entry(command.date, &entry)?;
        info!(
            "Stored entry for '{}' ({}) in ledger {}",
            entry.name,
            entry.rider,
            command.date.format("%d-%m-%Y")
        );

        Ok(ProcessMessageResult {
            entry: Some(entry),
            violations: Vec::new(),
            success_message: "Data added to spreadsheet.".to_string(),
        })
    }

    /// The last N entries of the date's ledger in insertion order. A date
    /// with no ledger yields an empty result.
    pub fn recent_entries(&self, query: RecentEntriesQuery) -> Result<RecentEntriesResult> {
        let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        let (entries, total_count) = self.ledger_repository.last_entries(query.date, limit)?;
        Ok(RecentEntriesResult {
            entries,
            total_count,
        })
    }

    /// Delete one entry by 1-based position. Positions outside the ledger
    /// or older than the last-10 window fail without touching the file.
    pub fn delete_entry(&self, command: DeleteEntryCommand) -> Result<DeleteEntryResult> {
        let removed = self
            .ledger_repository
            .delete_entry(command.date, command.position)?;
        info!(
            "Deleted entry '{}' at position {} from ledger {}",
            removed.name,
            command.position,
            command.date.format("%d-%m-%Y")
        );
        Ok(DeleteEntryResult {
            success_message: format!("Record number {} deleted.", command.position),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::entry::{DeleteEntryError, Rider};
    use crate::storage::csv::test_utils::TestEnvironment;
    use crate::storage::csv::CsvConnection;
    use chrono::NaiveDate;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    fn setup() -> Result<(EntryService<CsvConnection>, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        let service = EntryService::new(Arc::new(env.connection.clone()));
        Ok((service, env))
    }

    fn cash_message(name: &str, cash: f64) -> String {
        format!("Name: {}\nPhone: 0300 123-4567\nDelivery Address: DHA\nFare: 100\nCash: {}", name, cash)
    }

    #[test]
    fn valid_message_is_stored() -> Result<()> {
        let (service, _env) = setup()?;

        let result = service.process_message(ProcessMessageCommand {
            date: test_date(),
            message: cash_message("Ahmed", 450.0),
            rider: Rider::Zubair,
            fare_paid_online: false,
        })?;

        assert!(result.is_accepted());
        assert_eq!(result.success_message, "Data added to spreadsheet.");
        let entry = result.entry.unwrap();
        assert_eq!(entry.name, "ahmed");
        assert_eq!(entry.phone, "03001234567");

        let recent = service.recent_entries(RecentEntriesQuery {
            date: test_date(),
            limit: None,
        })?;
        assert_eq!(recent.total_count, 1);
        assert_eq!(recent.entries[0].cash, 450.0);
        Ok(())
    }

    #[test]
    fn invalid_message_is_rejected_and_not_stored() -> Result<()> {
        let (service, _env) = setup()?;

        let result = service.process_message(ProcessMessageCommand {
            date: test_date(),
            message: "Name: Sara\nCash: 50\nOnline: 20".to_string(),
            rider: Rider::Shazaib,
            fare_paid_online: false,
        })?;

        assert!(!result.is_accepted());
        assert_eq!(
            result.violations,
            vec!["Exactly one of Cash, Online, or Credit Card must be selected.".to_string()]
        );
        assert!(result.entry.is_none());

        let recent = service.recent_entries(RecentEntriesQuery {
            date: test_date(),
            limit: None,
        })?;
        assert_eq!(recent.total_count, 0);
        Ok(())
    }

    #[test]
    fn operator_choice_overrides_message_text() -> Result<()> {
        let (service, _env) = setup()?;

        // Message says no, the operator's radio says yes; cash entry must
        // now violate the fare-paid-online rule.
        let result = service.process_message(ProcessMessageCommand {
            date: test_date(),
            message: "Name: Omar\nFare paid Online: No\nCash: 100".to_string(),
            rider: Rider::Indrive,
            fare_paid_online: true,
        })?;

        assert_eq!(
            result.violations,
            vec!["If Cash is selected, Fare Paid Online must be 'No'.".to_string()]
        );
        Ok(())
    }

    #[test]
    fn recent_entries_defaults_to_last_ten() -> Result<()> {
        let (service, _env) = setup()?;
        for i in 1..=12 {
            service.process_message(ProcessMessageCommand {
                date: test_date(),
                message: cash_message(&format!("Customer {}", i), i as f64),
                rider: Rider::Pickup,
                fare_paid_online: false,
            })?;
        }

        let recent = service.recent_entries(RecentEntriesQuery {
            date: test_date(),
            limit: None,
        })?;
        assert_eq!(recent.total_count, 12);
        assert_eq!(recent.entries.len(), 10);
        assert_eq!(recent.entries[0].name, "customer 3");
        Ok(())
    }

    #[test]
    fn recent_entries_for_missing_ledger_is_empty() -> Result<()> {
        let (service, _env) = setup()?;
        let recent = service.recent_entries(RecentEntriesQuery {
            date: test_date(),
            limit: Some(10),
        })?;
        assert_eq!(recent.total_count, 0);
        assert!(recent.entries.is_empty());
        Ok(())
    }

    #[test]
    fn delete_reports_position_in_message() -> Result<()> {
        let (service, _env) = setup()?;
        service.process_message(ProcessMessageCommand {
            date: test_date(),
            message: cash_message("Ahmed", 100.0),
            rider: Rider::Zubair,
            fare_paid_online: false,
        })?;

        let result = service.delete_entry(DeleteEntryCommand {
            date: test_date(),
            position: 1,
        })?;
        assert_eq!(result.success_message, "Record number 1 deleted.");
        Ok(())
    }

    #[test]
    fn delete_window_violation_surfaces_as_typed_error() -> Result<()> {
        let (service, _env) = setup()?;
        for i in 1..=15 {
            service.process_message(ProcessMessageCommand {
                date: test_date(),
                message: cash_message(&format!("Customer {}", i), i as f64),
                rider: Rider::Zubair,
                fare_paid_online: false,
            })?;
        }

        let err = service
            .delete_entry(DeleteEntryCommand {
                date: test_date(),
                position: 1,
            })
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DeleteEntryError>(),
            Some(DeleteEntryError::OutsideWindow { .. })
        ));
        Ok(())
    }
}
