//! Note model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::util::unix_timestamp_ms;

/// A unique identifier for a note, using UUID v7 (time-sortable)
///
/// Ids are assigned at creation and are the only handle used to address a
/// note for mutation; positions are derived for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(Uuid);

impl NoteId {
    /// Create a new unique note ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A note in a collection
///
/// The persisted shape is the legacy `{title, content}` record enriched with
/// an id and timestamps; records written by older collections load with serde
/// defaults (fresh id, current time) and pick up the full shape on the next
/// persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    #[serde(default)]
    pub id: NoteId,
    /// Display title (empty in content-only collections)
    #[serde(default)]
    pub title: String,
    /// Plain text content
    pub content: String,
    /// Creation timestamp (Unix ms)
    #[serde(default = "unix_timestamp_ms")]
    pub created_at: i64,
    /// Last update timestamp (Unix ms)
    #[serde(default = "unix_timestamp_ms")]
    pub updated_at: i64,
}

impl Note {
    /// Create a new note with the given title and content
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = unix_timestamp_ms();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Header text shown for a collapsed entry: the title, or the first
    /// content line truncated to `max_len` characters for untitled notes.
    #[must_use]
    pub fn header(&self, max_len: usize) -> String {
        if self.title.is_empty() {
            let first_line = self.content.lines().next().unwrap_or("");
            if first_line.chars().count() <= max_len {
                first_line.to_string()
            } else {
                let mut truncated: String = first_line.chars().take(max_len).collect();
                truncated.push_str("...");
                truncated
            }
        } else {
            self.title.clone()
        }
    }
}
