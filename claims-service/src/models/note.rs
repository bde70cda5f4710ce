use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text annotation attached to a claim.
///
/// Notes are immutable once loaded; the summarization pipeline never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Note {
    pub id: i64,
    pub claim_id: i64,
    pub content: String,
    pub created_date: DateTime<Utc>,
}

/// Envelope type matching the on-disk notes file layout.
#[derive(Debug, Deserialize)]
pub struct NotesFile {
    #[serde(rename = "Notes")]
    pub notes: Vec<Note>,
}
