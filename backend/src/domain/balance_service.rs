//! Running cash balance for one day's ledger.
//!
//! The fold starts at the configured opening balance and walks the ledger
//! in insertion order, never sorted. Each entry adds its cash; an entry
//! whose fare was paid online first debits the fare from the drawer (the
//! rider was reimbursed in cash), and its balance row shows that debit as
//! a negative cash-out.

use anyhow::Result;
use chrono::NaiveDate;
use log::info;
use std::sync::Arc;

use crate::domain::models::entry::LedgerEntry;
use crate::storage::{Connection, LedgerStorage};

/// Name shown on the leading opening-balance row.
pub const OPENING_ROW_NAME: &str = "Opening Balance";

/// One row of the balance view.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceRow {
    pub name: String,
    /// Cash on hand after applying this row.
    pub running_balance: f64,
    pub cash_in: f64,
    pub cash_out: f64,
    pub online: f64,
}

/// The balance view for one date: opening row first, then one row per
/// ledger entry in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub opening_balance: f64,
    pub rows: Vec<BalanceRow>,
    pub closing_balance: f64,
    pub total_cash_in: f64,
    pub total_cash_out: f64,
    pub total_online: f64,
}

#[derive(Clone)]
pub struct BalanceService<C: Connection> {
    ledger_repository: C::LedgerRepository,
    opening_balance: f64,
}

impl<C: Connection> BalanceService<C> {
    pub fn new(connection: Arc<C>, opening_balance: f64) -> Self {
        let ledger_repository = connection.create_ledger_repository();
        Self {
            ledger_repository,
            opening_balance,
        }
    }

    /// Read the date's ledger and fold it into a balance sheet. A missing
    /// ledger yields a sheet with only the opening row.
    pub fn daily_balance(&self, date: NaiveDate) -> Result<BalanceSheet> {
        let entries = self.ledger_repository.read_entries(date)?;
        let sheet = compute_sheet(&entries, self.opening_balance);
        info!(
            "Balance for ledger {}: opening {:.2}, closing {:.2}",
            date.format("%d-%m-%Y"),
            sheet.opening_balance,
            sheet.closing_balance
        );
        Ok(sheet)
    }
}

/// Pure running-balance fold over a day's entries in ledger order.
pub fn compute_sheet(entries: &[LedgerEntry], opening_balance: f64) -> BalanceSheet {
    let mut rows = vec![BalanceRow {
        name: OPENING_ROW_NAME.to_string(),
        running_balance: opening_balance,
        cash_in: 0.0,
        cash_out: 0.0,
        online: 0.0,
    }];

    let mut running_balance = opening_balance;

    for entry in entries {
        let cash_in = entry.cash;
        let mut cash_out = 0.0;

        // The fare debit applies before the cash credit.
        if entry.fare_paid_online {
            cash_out = -entry.fare;
            running_balance -= entry.fare;
        }
        running_balance += cash_in;

        rows.push(BalanceRow {
            name: entry.balance_display_name(),
            running_balance,
            cash_in,
            cash_out,
            online: entry.online,
        });
    }

    let total_cash_in = rows.iter().map(|r| r.cash_in).sum();
    let total_cash_out = rows.iter().map(|r| r.cash_out).sum();
    let total_online = rows.iter().map(|r| r.online).sum();

    BalanceSheet {
        opening_balance,
        rows,
        closing_balance: running_balance,
        total_cash_in,
        total_cash_out,
        total_online,
    }
}
