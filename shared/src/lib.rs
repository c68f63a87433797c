//! DTO types exchanged between the courier ledger backend and its
//! presentation layer.
//!
//! Dates cross this boundary as plain `YYYY-MM-DD` strings; the backend
//! parses them at the REST layer. Amounts are f64 throughout, matching the
//! ledger's arithmetic.

use serde::{Deserialize, Serialize};

/// One stored ledger entry, as shown in the "last N records" view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntryDto {
    /// Customer name, lowercased by the parser
    pub name: String,
    /// Digits-only phone number, kept as text
    pub phone: String,
    pub delivery_address: String,
    pub fare: f64,
    pub fare_paid_online: bool,
    pub cash: f64,
    pub online: f64,
    pub credit_card: f64,
    /// Last digits of the card; empty unless a card payment
    pub card_last_digits: String,
    /// Rider identity, lowercase ("pickup", "shazaib", "zubair", "indrive")
    pub rider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Request to parse, validate and append one pasted message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMessageRequest {
    /// Ledger date, `YYYY-MM-DD`
    pub date: String,
    /// The raw pasted message text
    pub message: String,
    /// Selected rider for this entry
    pub rider: String,
    /// Operator's fare-paid-online choice; overrides the message text
    pub fare_paid_online: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMessageResponse {
    pub success: bool,
    /// Validation violations; empty when the entry was accepted
    pub violations: Vec<String>,
    /// The stored entry when accepted
    pub entry: Option<LedgerEntryDto>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentEntriesResponse {
    /// The last N entries in insertion order
    pub entries: Vec<LedgerEntryDto>,
    /// Total entries in the day's ledger
    pub total_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteEntryResponse {
    pub success: bool,
    pub message: String,
}

/// Per-rider sums over the day's entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderTotalsDto {
    pub rider: String,
    pub fare: f64,
    pub cash: f64,
    pub online: f64,
    pub credit_card: f64,
}

/// One row of the cash or online table ("Pickup" pseudo-row included).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRowDto {
    pub rider: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentTotalsDto {
    pub rows: Vec<PaymentRowDto>,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPaymentRowDto {
    pub name: String,
    pub card_last_digits: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnlinePaymentRowDto {
    pub name: String,
    pub amount: f64,
}

/// The three payment-method views plus per-rider totals for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatsResponse {
    pub rider_totals: Vec<RiderTotalsDto>,
    pub cash: PaymentTotalsDto,
    pub online: PaymentTotalsDto,
    pub card_payments: Vec<CardPaymentRowDto>,
    pub card_payments_total: f64,
    pub online_payments: Vec<OnlinePaymentRowDto>,
    pub online_payments_total: f64,
}

/// One row of the running-balance view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRowDto {
    /// Entry name, suffixed with " Fare" for fare-paid-online entries
    pub name: String,
    /// Cash on hand after applying this row
    pub running_balance: f64,
    pub cash_in: f64,
    pub cash_out: f64,
    pub online: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheetResponse {
    pub opening_balance: f64,
    /// Opening row first, then one row per ledger entry in insertion order
    pub rows: Vec<BalanceRowDto>,
    pub closing_balance: f64,
    pub total_cash_in: f64,
    pub total_cash_out: f64,
    pub total_online: f64,
}
