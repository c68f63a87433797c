//! Parser for the pasted delivery/ride message.
//!
//! Each line is scanned independently against a fixed label table; line
//! order in the message does not matter. Matching is substring-based, so a
//! line is claimed by the first label it contains. The table is ordered
//! most-specific-first: `Fare paid Online:` must be tried before `Fare:`
//! and `Online:`, otherwise a "Fare paid Online: Yes" line would be
//! claimed by the wrong field.
//!
//! Missing or unmatched fields silently keep their defaults. Enforcement
//! of the business rules lives in [`crate::domain::entry_validator`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::models::entry::{LedgerEntry, Rider};

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(\.\d+)?").unwrap());

/// Field a label line is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Phone,
    DeliveryAddress,
    FarePaidOnline,
    Fare,
    Cash,
    CreditCard,
    Online,
    LastDigits,
}

/// Label table in match order. `Fare paid Online:` sits above `Fare:` and
/// `Online:` because a substring match on those shorter labels would claim
/// the fare-paid-online line first.
const LABELS: [(&str, Field); 9] = [
    ("Name:", Field::Name),
    ("Phone:", Field::Phone),
    ("Delivery Address:", Field::DeliveryAddress),
    ("Fare paid Online:", Field::FarePaidOnline),
    ("Fare:", Field::Fare),
    ("Cash:", Field::Cash),
    ("Credit Card:", Field::CreditCard),
    ("Online:", Field::Online),
    ("last-digits:", Field::LastDigits),
];

/// Extract the first integer-or-decimal substring of `value` as f64.
/// Returns 0.0 when the value carries no digits at all.
pub fn extract_numeric(value: &str) -> f64 {
    NUMERIC_RE
        .find(value)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parse a raw message into a ledger entry attributed to `rider`.
///
/// The rider is never read from the text; it always comes from the
/// operator's selection.
pub fn parse_message(message: &str, rider: Rider) -> LedgerEntry {
    let mut entry = LedgerEntry::empty(rider);

    for line in message.lines() {
        let Some((label, field)) = LABELS
            .iter()
            .find(|(label, _)| line.contains(label))
            .copied()
        else {
            continue;
        };
        let value = line.replacen(label, "", 1);
        let value = value.trim();

        match field {
            Field::Name => entry.name = value.to_lowercase(),
            Field::Phone => entry.phone = value.replace([' ', '-'], ""),
            Field::DeliveryAddress => entry.delivery_address = value.to_lowercase(),
            Field::FarePaidOnline => entry.fare_paid_online = value.to_lowercase() == "yes",
            Field::Fare => entry.fare = extract_numeric(value),
            Field::Cash => entry.cash = extract_numeric(value),
            Field::CreditCard => entry.credit_card = extract_numeric(value),
            Field::Online => entry.online = extract_numeric(value),
            Field::LastDigits => entry.card_last_digits = value.to_string(),
        }
    }

    entry
}
