//! Note repository implementation

use chrono::Utc;
use rusqlite::params;

use super::Database;
use crate::error::{Error, Result};
use crate::models::{Note, NoteId};
use crate::util::iso_timestamp;

/// Trait for note storage operations
pub trait NoteRepository {
    /// All notes, ascending by id
    fn list_all(&self) -> Result<Vec<Note>>;

    /// Insert a note and return the stored row
    fn insert(&self, text: &str) -> Result<Note>;
}

/// `SQLite` implementation of `NoteRepository`
pub struct SqliteNoteRepository<'a> {
    db: &'a Database,
}

impl<'a> SqliteNoteRepository<'a> {
    /// Create a new repository over the given database
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Parse a note from a database row
    fn parse_note(row: &rusqlite::Row<'_>) -> rusqlite::Result<Note> {
        Ok(Note {
            id: NoteId::new(row.get(0)?),
            text: row.get(1)?,
            created_at: row.get(2)?,
        })
    }

    /// Drop a row whose insert could not be persisted, so the next insert
    /// reuses its id.
    fn discard(&self, id: NoteId) -> Result<()> {
        self.db
            .run_statement("DELETE FROM notes WHERE id = ?", params![id.get()])?;
        self.db.run_statement(
            "UPDATE sqlite_sequence SET seq = ? WHERE name = 'notes'",
            params![id.get() - 1],
        )?;
        tracing::debug!("Discarded unpersisted note {}", id);
        Ok(())
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn list_all(&self) -> Result<Vec<Note>> {
        self.db.query_rows(
            "SELECT id, text, createdAt FROM notes ORDER BY id ASC",
            [],
            Self::parse_note,
        )
    }

    fn insert(&self, text: &str) -> Result<Note> {
        let created_at = iso_timestamp(Utc::now());

        self.db.run_statement(
            "INSERT INTO notes (text, createdAt) VALUES (?, ?)",
            params![text, created_at],
        )?;

        let note = self
            .db
            .query_rows(
                "SELECT id, text, createdAt FROM notes WHERE id = ?",
                params![self.db.last_insert_id()],
                Self::parse_note,
            )?
            .into_iter()
            .next()
            .ok_or(Error::InsertVerification)?;

        if let Err(error) = self.db.persist() {
            self.discard(note.id)?;
            return Err(error);
        }
        tracing::debug!("Inserted note {}", note.id);
        Ok(note)
    }
}
