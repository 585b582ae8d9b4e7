//! Booking records.

use chrono::NaiveDate;
use serde_json::Value;

use luxeboard_core::{BookingStatus, RecordIdentity};

use super::fields::{amount_field, date_field, string_field};

/// A reservation, normalized from the API's loose shape.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub identity: RecordIdentity,
    /// `guestName`, falling back to `guest`.
    pub guest_name: Option<String>,
    /// `propertyName`, falling back to `property`.
    pub property_name: Option<String>,
    /// `checkIn`, falling back to `startDate`.
    pub check_in: Option<NaiveDate>,
    /// `checkOut`, falling back to `endDate`.
    pub check_out: Option<NaiveDate>,
    /// Display amount: `total`, falling back to `amount`, then "0".
    pub total: String,
    pub status: BookingStatus,
}

impl BookingRecord {
    /// Normalize a loose API record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            identity: RecordIdentity::from_value(value),
            guest_name: string_field(value, &["guestName", "guest"]),
            property_name: string_field(value, &["propertyName", "property"]),
            check_in: date_field(value, &["checkIn", "startDate"]),
            check_out: date_field(value, &["checkOut", "endDate"]),
            total: amount_field(value, &["total", "amount"]),
            status: string_field(value, &["status"])
                .map_or_else(BookingStatus::default, |s| {
                    BookingStatus::parse_or_default(&s)
                }),
        }
    }
}
