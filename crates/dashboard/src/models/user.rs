//! Dashboard user records.
//!
//! `UserRecord` is both the normalized shape of `/users` records and the
//! serde shape persisted under the session user key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use luxeboard_core::{RecordIdentity, Role};

use super::fields::string_or;

/// A dashboard user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(flatten)]
    pub identity: RecordIdentity,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Role name as the API spells it. Kept loose; gate checks parse it
    /// strictly while the navigation filter applies the Admin fallback.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub status: String,
}

impl UserRecord {
    /// Normalize a loose API record.
    ///
    /// Permissions arrive as plain strings or as `{name}` objects; both
    /// normalize to their names, anything else is dropped.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let permissions = value
            .get("permissions")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Object(_) => item
                            .get("name")
                            .and_then(Value::as_str)
                            .map(ToOwned::to_owned),
                        _ => None,
                    })
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            identity: RecordIdentity::from_value(value),
            name: string_or(value, &["name"], ""),
            email: string_or(value, &["email"], ""),
            role: string_or(value, &["role"], ""),
            permissions,
            status: string_or(value, &["status"], "Active"),
        }
    }

    /// The user's role, when it parses as a known one.
    #[must_use]
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    /// Whether this user passes the admin-only gate.
    ///
    /// Advisory UI filtering only; the API does not enforce this.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.parsed_role() == Some(Role::Admin)
    }
}
