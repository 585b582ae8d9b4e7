//! Property records.

use serde_json::Value;

use luxeboard_core::RecordIdentity;

use super::fields::{number_field, string_field, string_or};

/// A rentable property, normalized from the API's loose shape.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub identity: RecordIdentity,
    /// `name`, falling back to `propertyName`.
    pub name: Option<String>,
    pub location: Option<String>,
    pub status: String,
    /// Occupancy percentage, when reported.
    pub occupancy: Option<f64>,
    pub nightly_rate: Option<f64>,
    pub photos: Vec<String>,
}

impl PropertyRecord {
    /// Normalize a loose API record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let photos = value
            .get("photos")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            identity: RecordIdentity::from_value(value),
            name: string_field(value, &["name", "propertyName"]),
            location: string_field(value, &["location"]),
            status: string_or(value, &["status"], "Listed"),
            occupancy: number_field(value, &["occupancy"]),
            nightly_rate: number_field(value, &["nightlyRate"]),
            photos,
        }
    }
}
