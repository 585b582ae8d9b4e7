//! Dashboard roles.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to a dashboard user.
///
/// Roles drive navigation filtering and the advisory admin-only gate on
/// user management. They are **not** a security boundary: the remote API
/// enforces nothing based on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access to every module, including user management.
    Admin,
    /// Operations access without user management or payments.
    Manager,
    /// Task and guest access only.
    Staff,
}

impl Role {
    /// Parse a role name exactly as the API spells it.
    ///
    /// Returns `None` for unknown names; callers that want the
    /// broadest-access fallback apply `unwrap_or(Role::Admin)` themselves.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Admin" => Some(Self::Admin),
            "Manager" => Some(Self::Manager),
            "Staff" => Some(Self::Staff),
            _ => None,
        }
    }

    /// The wire/display name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::Staff => "Staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
