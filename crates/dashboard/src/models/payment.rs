//! Payment records.

use chrono::NaiveDate;
use serde_json::Value;

use luxeboard_core::{PaymentStatus, RecordIdentity};

use super::fields::{amount_field, date_field, string_field};

/// A payment, normalized from the API's loose shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub identity: RecordIdentity,
    /// `guest`, falling back to `guestName`.
    pub guest: Option<String>,
    /// `property`, falling back to `propertyName`.
    pub property: Option<String>,
    /// Display amount: `amount`, falling back to `total`, then "0".
    pub amount: String,
    pub date: Option<NaiveDate>,
    pub method: Option<String>,
    pub status: PaymentStatus,
}

impl PaymentRecord {
    /// Normalize a loose API record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            identity: RecordIdentity::from_value(value),
            guest: string_field(value, &["guest", "guestName"]),
            property: string_field(value, &["property", "propertyName"]),
            amount: amount_field(value, &["amount", "total"]),
            date: date_field(value, &["date"]),
            method: string_field(value, &["method"]),
            status: string_field(value, &["status"])
                .map_or_else(PaymentStatus::default, |s| {
                    PaymentStatus::parse_or_default(&s)
                }),
        }
    }
}
