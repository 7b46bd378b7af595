//! Todo record model.
//!
//! # Responsibility
//! - Define the canonical `TodoItem` and its on-disk field naming.
//! - Provide content validation and timestamp helpers.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - `updated_at` is never earlier than `created_at`.
//! - Serialized field names are `id, content, createdAt, updatedAt`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque record identifier. Older builds wrote epoch-millisecond strings,
/// so no format is assumed when reading.
pub type TodoId = String;

/// Ordered record list, newest-created first.
pub type TaskCollection = Vec<TodoItem>;

/// One persisted to-do note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub content: String,
    /// ISO-8601 UTC, millisecond precision.
    pub created_at: String,
    /// ISO-8601 UTC, millisecond precision.
    pub updated_at: String,
}

impl TodoItem {
    /// Builds a fresh record with a generated id and both timestamps at `now`.
    pub fn new(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        let stamp = format_timestamp(now);
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }

    /// Parses `updated_at`, returning `None` for unparseable legacy values.
    pub fn updated_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.updated_at)
    }
}

/// Validation failures for record content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    EmptyContent,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "content must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// Rejects content that is empty after trimming whitespace.
pub fn validate_content(content: &str) -> Result<(), TodoValidationError> {
    if content.trim().is_empty() {
        return Err(TodoValidationError::EmptyContent);
    }
    Ok(())
}

/// Formats a timestamp the way the persisted blob stores it,
/// e.g. `2024-05-01T08:30:00.000Z`.
pub fn format_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, parse_timestamp, validate_content, TodoItem};
    use chrono::{TimeZone, Utc};

    #[test]
    fn new_item_has_equal_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let item = TodoItem::new("Buy milk", now);
        assert_eq!(item.created_at, item.updated_at);
        assert_eq!(item.created_at, "2024-05-01T08:30:00.000Z");
        assert!(!item.id.is_empty());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let item = TodoItem::new("x", now);
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn validate_rejects_blank_content() {
        assert!(validate_content("").is_err());
        assert!(validate_content(" \n\t").is_err());
        assert!(validate_content(" a ").is_ok());
    }

    #[test]
    fn timestamp_roundtrip_keeps_millis() {
        let parsed = parse_timestamp("2024-05-01T08:30:00.123Z").unwrap();
        assert_eq!(format_timestamp(parsed), "2024-05-01T08:30:00.123Z");
        assert!(parse_timestamp("1714552200000").is_none());
    }
}
