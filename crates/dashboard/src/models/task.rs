//! Task records.

use serde_json::Value;

use luxeboard_core::{RecordIdentity, TaskStatus};

use super::fields::{string_field, string_or};

/// A housekeeping/ops task, normalized from the API's loose shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub identity: RecordIdentity,
    pub title: String,
    pub assignee: Option<String>,
    /// Board column: `column`, falling back to `status`.
    pub status: TaskStatus,
    pub due: Option<String>,
    pub priority: Option<String>,
}

impl TaskRecord {
    /// Normalize a loose API record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            identity: RecordIdentity::from_value(value),
            title: string_or(value, &["title"], ""),
            assignee: string_field(value, &["assignee"]),
            status: string_field(value, &["column", "status"])
                .map_or_else(TaskStatus::default, |s| TaskStatus::parse_or_default(&s)),
            due: string_field(value, &["due"]),
            priority: string_field(value, &["priority"]),
        }
    }
}
