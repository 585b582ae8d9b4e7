//! Permission records.

use serde_json::Value;

use luxeboard_core::RecordIdentity;

use super::fields::string_or;

/// A grantable permission, normalized from the API's loose shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRecord {
    pub identity: RecordIdentity,
    pub name: String,
}

impl PermissionRecord {
    /// Normalize a loose API record. Bare-string entries normalize to a
    /// name without identity.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if let Value::String(name) = value {
            return Self {
                identity: RecordIdentity::default(),
                name: name.clone(),
            };
        }
        Self {
            identity: RecordIdentity::from_value(value),
            name: string_or(value, &["name"], ""),
        }
    }
}
