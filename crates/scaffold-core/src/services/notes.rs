//! Boundary-facing notes API.

use chrono::Utc;

use super::NoteStore;
use crate::error::Result;
use crate::models::{Note, SyncResult};

/// Notes operations exposed to the UI
#[derive(Clone)]
pub struct NotesService {
    store: NoteStore,
}

impl NotesService {
    pub const fn new(store: NoteStore) -> Self {
        Self { store }
    }

    /// All notes, ascending by id
    pub async fn get_notes(&self) -> Result<Vec<Note>> {
        self.store.list_all().await
    }

    /// Store a new note
    pub async fn add_note(&self, text: &str) -> Result<Note> {
        self.store.insert(text).await
    }

    /// Placeholder for a remote sync integration.
    ///
    /// Makes no network call and always reports zero pushed/pulled notes.
    pub fn sync(&self) -> SyncResult {
        let result = SyncResult::empty(Utc::now());
        tracing::debug!("Sync placeholder completed at {}", result.last_sync);
        result
    }

    pub const fn store(&self) -> &NoteStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::parse_iso_timestamp;
    use chrono::DurationRound;

    fn service() -> NotesService {
        NotesService::new(NoteStore::in_memory())
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let service = service();
        let started = Utc::now()
            .duration_trunc(chrono::Duration::milliseconds(1))
            .unwrap();

        let note = service.add_note("hello").await.unwrap();
        let notes = service.get_notes().await.unwrap();

        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0], note);
        assert_eq!(notes[0].id.get(), 1);
        assert_eq!(notes[0].text, "hello");
        assert!(notes[0].created_at_utc().unwrap() >= started);
    }

    #[tokio::test]
    async fn test_get_on_fresh_store_is_empty() {
        assert!(service().get_notes().await.unwrap().is_empty());
    }

    #[test]
    fn test_sync_reports_zero_counts() {
        let service = service();
        let started = Utc::now()
            .duration_trunc(chrono::Duration::milliseconds(1))
            .unwrap();

        let result = service.sync();

        assert_eq!(result.pushed, 0);
        assert_eq!(result.pulled, 0);
        assert!(parse_iso_timestamp(&result.last_sync).unwrap() >= started);
        assert!(!service.store().is_initialized());
    }
}
