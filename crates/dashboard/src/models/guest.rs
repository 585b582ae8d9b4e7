//! Guest records.

use serde_json::Value;

use luxeboard_core::RecordIdentity;

use super::fields::string_field;

/// A guest profile, normalized from the API's loose shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GuestRecord {
    pub identity: RecordIdentity,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub loyalty_tier: Option<String>,
    pub total_bookings: Option<u64>,
}

impl GuestRecord {
    /// Normalize a loose API record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            identity: RecordIdentity::from_value(value),
            name: string_field(value, &["name"]),
            email: string_field(value, &["email"]),
            phone: string_field(value, &["phone"]),
            loyalty_tier: string_field(value, &["loyaltyTier"]),
            total_bookings: value.get("totalBookings").and_then(Value::as_u64),
        }
    }

    /// Case-insensitive substring match over name and email, the search
    /// used by the guests page.
    #[must_use]
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let haystack = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&query))
        };
        haystack(&self.name) || haystack(&self.email)
    }
}
