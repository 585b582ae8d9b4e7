//! Dual-key record identity.
//!
//! The remote API returns records keyed by either a canonical `id` or a
//! legacy `_id`, and some records carry both. Callers must treat the two as
//! interchangeable when resolving a record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The identity of a resource record.
///
/// Records are matched by *either* key field. When both are present, the
/// canonical `id` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordIdentity {
    /// Canonical identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Legacy identifier (`_id`), kept for records that predate the
    /// canonical key.
    #[serde(default, rename = "_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<String>,
}

impl RecordIdentity {
    /// Create an identity with only the canonical key set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            legacy_id: None,
        }
    }

    /// Extract the identity from a loose JSON record.
    ///
    /// Non-string key fields are ignored.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        };
        Self {
            id: field("id"),
            legacy_id: field("_id"),
        }
    }

    /// The identifier to use when addressing this record.
    ///
    /// The canonical `id` wins over the legacy `_id` when both are present.
    #[must_use]
    pub fn canonical(&self) -> Option<&str> {
        self.id.as_deref().or(self.legacy_id.as_deref())
    }

    /// Whether `candidate` refers to this record via either key field.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.id.as_deref() == Some(candidate) || self.legacy_id.as_deref() == Some(candidate)
    }

    /// Whether neither key field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none() && self.legacy_id.is_none()
    }
}
