//! ToDo - the task record exchanged with the remote todo API
//!
//! The remote API owns every record: identifiers and audit metadata are
//! assigned server-side and echoed back on reads and writes. The client
//! composes a ToDo only to carry user input and leaves the server-owned
//! fields at their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task record, serialized with the remote API's camelCase field names.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ToDo {
    /// Server-assigned identifier, `0` until the record is persisted
    pub id: i64,

    /// Task description supplied by the user
    pub content: String,

    /// Completion flag
    pub is_completed: bool,

    /// Who created the record (server-assigned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// When the record was created (server-assigned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,

    /// Who last modified the record (server-assigned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,

    /// When the record was last modified (server-assigned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

impl ToDo {
    /// Create a not-yet-persisted ToDo carrying the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Create a ToDo addressing an existing record, for edits
    pub fn with_id(id: i64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            ..Self::default()
        }
    }
}
