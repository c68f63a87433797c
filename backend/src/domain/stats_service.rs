//! Daily aggregation views over one date's ledger.
//!
//! All sums are spreadsheet-style group-by folds over the in-memory entry
//! list. The synthetic "Pickup" row in the cash and online tables buckets
//! entries by delivery address, not by rider, and the tables' grand totals
//! sum the rows including that pseudo-row, so pickup entries whose rider
//! row also exists count twice, exactly as the original sheet did.

use anyhow::Result;
use log::info;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::models::entry::LedgerEntry;
use crate::storage::{Connection, LedgerStorage};
use chrono::NaiveDate;

/// Display label of the pickup pseudo-row.
pub const PICKUP_ROW_LABEL: &str = "Pickup";

/// Per-rider sums across all four monetary columns.
#[derive(Debug, Clone, PartialEq)]
pub struct RiderTotals {
    pub rider: String,
    pub fare: f64,
    pub cash: f64,
    pub online: f64,
    pub credit_card: f64,
}

/// One row of the cash or online table.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub rider: String,
    pub amount: f64,
}

/// A per-rider payment table with its grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentTotals {
    pub rows: Vec<PaymentRow>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardPaymentRow {
    pub name: String,
    pub card_last_digits: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnlinePaymentRow {
    pub name: String,
    pub amount: f64,
}

/// The aggregate views for one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyStats {
    pub rider_totals: Vec<RiderTotals>,
    pub cash: PaymentTotals,
    pub online: PaymentTotals,
    pub card_payments: Vec<CardPaymentRow>,
    pub card_payments_total: f64,
    pub online_payments: Vec<OnlinePaymentRow>,
    pub online_payments_total: f64,
}

#[derive(Clone)]
pub struct StatsService<C: Connection> {
    ledger_repository: C::LedgerRepository,
}

impl<C: Connection> StatsService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let ledger_repository = connection.create_ledger_repository();
        Self { ledger_repository }
    }

    /// Read the date's ledger and aggregate it. A missing ledger yields
    /// empty views.
    pub fn daily_stats(&self, date: NaiveDate) -> Result<DailyStats> {
        let entries = self.ledger_repository.read_entries(date)?;
        info!(
            "Aggregating {} entries for ledger {}",
            entries.len(),
            date.format("%d-%m-%Y")
        );
        Ok(aggregate(&entries))
    }
}

/// Pure aggregation over a day's entries in ledger order.
pub fn aggregate(entries: &[LedgerEntry]) -> DailyStats {
    // Group-by-rider sums. BTreeMap keeps rider order deterministic.
    let mut by_rider: BTreeMap<&str, RiderTotals> = BTreeMap::new();
    for entry in entries {
        let totals = by_rider
            .entry(entry.rider.as_str())
            .or_insert_with(|| RiderTotals {
                rider: entry.rider.to_string(),
                fare: 0.0,
                cash: 0.0,
                online: 0.0,
                credit_card: 0.0,
            });
        totals.fare += entry.fare;
        totals.cash += entry.cash;
        totals.online += entry.online;
        totals.credit_card += entry.credit_card;
    }
    let rider_totals: Vec<RiderTotals> = by_rider.into_values().collect();

    // Pickup pseudo-bucket, keyed by delivery address across all riders.
    let (pickup_cash, pickup_online) = entries
        .iter()
        .filter(|e| e.is_pickup())
        .fold((0.0, 0.0), |(cash, online), e| {
            (cash + e.cash, online + e.online)
        });

    let cash = payment_table(&rider_totals, |t| t.cash, pickup_cash);
    let online = payment_table(&rider_totals, |t| t.online, pickup_online);

    // Card payments grouped by (name, last digits).
    let mut by_card: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.credit_card != 0.0) {
        *by_card
            .entry((entry.name.as_str(), entry.card_last_digits.as_str()))
            .or_insert(0.0) += entry.credit_card;
    }
    let card_payments: Vec<CardPaymentRow> = by_card
        .into_iter()
        .map(|((name, digits), amount)| CardPaymentRow {
            name: name.to_string(),
            card_last_digits: digits.to_string(),
            amount,
        })
        .collect();
    let card_payments_total = card_payments.iter().map(|r| r.amount).sum();

    // Online payment detail keeps ledger order, one row per entry.
    let online_payments: Vec<OnlinePaymentRow> = entries
        .iter()
        .filter(|e| e.online > 0.0)
        .map(|e| OnlinePaymentRow {
            name: e.name.clone(),
            amount: e.online,
        })
        .collect();
    let online_payments_total = online_payments.iter().map(|r| r.amount).sum();

    DailyStats {
        rider_totals,
        cash,
        online,
        card_payments,
        card_payments_total,
        online_payments,
        online_payments_total,
    }
}

fn payment_table(
    rider_totals: &[RiderTotals],
    column: impl Fn(&RiderTotals) -> f64,
    pickup_amount: f64,
) -> PaymentTotals {
    let mut rows: Vec<PaymentRow> = rider_totals
        .iter()
        .map(|t| PaymentRow {
            rider: t.rider.clone(),
            amount: column(t),
        })
        .collect();
    rows.push(PaymentRow {
        rider: PICKUP_ROW_LABEL.to_string(),
        amount: pickup_amount,
    });
    let total = rows.iter().map(|r| r.amount).sum();
    PaymentTotals { rows, total }
}
