//! Status enums for dashboard records.
//!
//! Wire names match what the API returns; unknown values fall back to the
//! per-type default during normalization rather than failing.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Booking lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

impl BookingStatus {
    /// Parse a wire value, falling back to [`BookingStatus::Pending`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "Confirmed" => Self::Confirmed,
            "Cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }

    /// The wire/display name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Pending => "Pending",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment settlement status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Completed,
    #[default]
    Pending,
    Failed,
}

impl PaymentStatus {
    /// Parse a wire value, falling back to [`PaymentStatus::Pending`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "Completed" => Self::Completed,
            "Failed" => Self::Failed,
            _ => Self::Pending,
        }
    }

    /// The wire/display name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task board column.
///
/// The API spells these with spaces ("To Do", "In Progress"), which is also
/// the value sent as the `status` query parameter when filtering tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "To Do")]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Parse a wire value, falling back to [`TaskStatus::Todo`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        match name {
            "In Progress" => Self::InProgress,
            "Review" => Self::Review,
            "Done" => Self::Done,
            _ => Self::Todo,
        }
    }

    /// The wire/display name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
