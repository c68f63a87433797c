//! Cross-field business rules for a parsed ledger entry.
//!
//! Every rule is evaluated independently and all violations are collected;
//! nothing short-circuits. An entry with any violation must never reach
//! the ledger store.

use crate::domain::models::entry::LedgerEntry;

/// Validate an entry, returning every violated rule as a message. An empty
/// list means the entry is accepted.
pub fn validate(entry: &LedgerEntry) -> Vec<String> {
    let mut violations = Vec::new();

    let payment_methods_filled = [entry.cash, entry.online, entry.credit_card]
        .iter()
        .filter(|amount| **amount != 0.0)
        .count();
    if payment_methods_filled != 1 {
        violations.push("Exactly one of Cash, Online, or Credit Card must be selected.".to_string());
    }

    if entry.cash != 0.0 && entry.fare_paid_online {
        violations.push("If Cash is selected, Fare Paid Online must be 'No'.".to_string());
    }

    if entry.credit_card != 0.0 && entry.card_last_digits.is_empty() {
        violations.push("Last-digits field is required when Credit Card is selected.".to_string());
    }

    // Amounts must be finite and non-negative, including on entries built
    // without the parser.
    for (label, amount) in [
        ("Cash", entry.cash),
        ("Online", entry.online),
        ("Fare", entry.fare),
        ("Credit Card", entry.credit_card),
    ] {
        if !amount.is_finite() {
            violations.push(format!("{} must be numeric.", label));
        } else if amount < 0.0 {
            violations.push(format!("{} must be a non-negative number.", label));
        }
    }

    violations
}
