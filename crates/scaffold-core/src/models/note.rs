//! Note model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::util::parse_iso_timestamp;

/// Store-assigned note identifier (`SQLite` rowid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(i64);

impl NoteId {
    /// Wrap a raw row id
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw row id
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A persisted note. Append-only: never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique, insertion-ordered identifier
    pub id: NoteId,
    /// Note text as supplied by the caller
    pub text: String,
    /// Insertion instant, ISO 8601 UTC
    pub created_at: String,
}

impl Note {
    /// Parsed creation instant, if the stored string is well formed
    #[must_use]
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_iso_timestamp(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_note_id_parse() {
        let id: NoteId = " 42 ".parse().unwrap();
        assert_eq!(id, NoteId::new(42));
        assert!("abc".parse::<NoteId>().is_err());
    }

    #[test]
    fn test_note_serializes_camel_case() {
        let note = Note {
            id: NoteId::new(1),
            text: "hello".to_string(),
            created_at: "2024-05-01T12:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "text": "hello",
                "createdAt": "2024-05-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_created_at_utc() {
        let note = Note {
            id: NoteId::new(1),
            text: "hello".to_string(),
            created_at: "2024-05-01T12:00:00.000Z".to_string(),
        };
        assert_eq!(note.created_at_utc().unwrap().timestamp(), 1_714_564_800);
    }
}
