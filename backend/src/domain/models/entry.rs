//! Domain model for a ledger entry.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed rider enumeration. Serialized and displayed lowercase, matching
/// how riders are stored in the ledger file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rider {
    Pickup,
    Shazaib,
    Zubair,
    Indrive,
}

impl Rider {
    pub const ALL: [Rider; 4] = [Rider::Pickup, Rider::Shazaib, Rider::Zubair, Rider::Indrive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rider::Pickup => "pickup",
            Rider::Shazaib => "shazaib",
            Rider::Zubair => "zubair",
            Rider::Indrive => "indrive",
        }
    }
}

impl fmt::Display for Rider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rider {
    type Err = UnknownRiderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pickup" => Ok(Rider::Pickup),
            "shazaib" => Ok(Rider::Shazaib),
            "zubair" => Ok(Rider::Zubair),
            "indrive" => Ok(Rider::Indrive),
            other => Err(UnknownRiderError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown rider '{0}'")]
pub struct UnknownRiderError(pub String);

/// One completed delivery/ride transaction.
///
/// Text fields hold the parser's normalized form: name and address are
/// lowercased, phone is digits-only text. Exactly one of cash/online/
/// credit_card is nonzero on a validated entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub name: String,
    pub phone: String,
    pub delivery_address: String,
    pub fare: f64,
    pub fare_paid_online: bool,
    pub cash: f64,
    pub online: f64,
    pub credit_card: f64,
    pub card_last_digits: String,
    pub rider: Rider,
}

impl LedgerEntry {
    /// Blank entry with parser defaults, attributed to the given rider.
    pub fn empty(rider: Rider) -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            delivery_address: String::new(),
            fare: 0.0,
            fare_paid_online: false,
            cash: 0.0,
            online: 0.0,
            credit_card: 0.0,
            card_last_digits: String::new(),
            rider,
        }
    }

    /// Whether this entry belongs to the synthetic "Pickup" aggregation
    /// bucket, judged by delivery address rather than rider.
    pub fn is_pickup(&self) -> bool {
        matches!(
            self.delivery_address.to_lowercase().as_str(),
            "pickup" | "pick-up"
        )
    }

    /// Name shown in the balance view: suffixed with " Fare" when the fare
    /// was paid online.
    pub fn balance_display_name(&self) -> String {
        if self.fare_paid_online {
            format!("{} Fare", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Deletion failures the caller must be able to tell apart from storage
/// faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteEntryError {
    #[error("Record number out of range.")]
    OutOfRange { position: usize, count: usize },
    #[error("Only the last 10 records can be deleted.")]
    OutsideWindow { position: usize, count: usize },
}
