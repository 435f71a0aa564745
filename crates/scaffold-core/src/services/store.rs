//! Lazily opened, shared note store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::db::{Database, NoteRepository, SqliteNoteRepository};
use crate::error::{Error, Result};
use crate::models::Note;

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    Memory,
}

impl Location {
    fn open(&self) -> Result<Database> {
        match self {
            Self::File(path) => Database::open(path),
            Self::Memory => Database::open_in_memory(),
        }
    }
}

struct Inner {
    location: Location,
    db: OnceCell<Arc<Mutex<Database>>>,
}

/// Thread-safe handle to the note database.
///
/// The database is opened on first use; concurrent first calls share a single
/// open. SQLite and file work runs on the blocking pool, one operation at a
/// time. A failed open is not cached, so the next call tries again.
#[derive(Clone)]
pub struct NoteStore {
    inner: Arc<Inner>,
}

impl NoteStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_location(Location::File(path.into()))
    }

    /// Store with no backing file (primarily for tests)
    pub fn in_memory() -> Self {
        Self::with_location(Location::Memory)
    }

    fn with_location(location: Location) -> Self {
        Self {
            inner: Arc::new(Inner {
                location,
                db: OnceCell::new(),
            }),
        }
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        match &self.inner.location {
            Location::File(path) => Some(path.as_path()),
            Location::Memory => None,
        }
    }

    /// Whether the database has been opened yet
    pub fn is_initialized(&self) -> bool {
        self.inner.db.initialized()
    }

    /// All notes, ascending by id
    pub async fn list_all(&self) -> Result<Vec<Note>> {
        self.with_repository(|repo| repo.list_all()).await
    }

    /// Insert a note and persist the store
    pub async fn insert(&self, text: &str) -> Result<Note> {
        let text = text.to_owned();
        self.with_repository(move |repo| repo.insert(&text)).await
    }

    async fn database(&self) -> Result<Arc<Mutex<Database>>> {
        let db = self
            .inner
            .db
            .get_or_try_init(|| async {
                let location = self.inner.location.clone();
                let db = tokio::task::spawn_blocking(move || location.open())
                    .await
                    .map_err(|e| Error::Background(e.to_string()))??;
                Ok::<_, Error>(Arc::new(Mutex::new(db)))
            })
            .await?;
        Ok(Arc::clone(db))
    }

    async fn with_repository<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&SqliteNoteRepository<'_>) -> Result<T> + Send + 'static,
    {
        let db = self.database().await?;
        tokio::task::spawn_blocking(move || {
            let guard = db.blocking_lock();
            op(&SqliteNoteRepository::new(&guard))
        })
        .await
        .map_err(|e| Error::Background(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_opens_lazily() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("notes.sqlite");
        let store = NoteStore::new(&path);

        assert!(!store.is_initialized());
        assert_eq!(store.path(), Some(path.as_path()));

        assert!(store.list_all().await.unwrap().is_empty());
        assert!(store.is_initialized());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_concurrent_first_use_opens_once() {
        let store = NoteStore::in_memory();

        let (a, b) = tokio::join!(store.insert("a"), store.insert("b"));
        let mut ids = vec![a.unwrap().id.get(), b.unwrap().id.get()];
        ids.sort_unstable();

        assert_eq!(ids, vec![1, 2]);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_reopen_same_file_keeps_order() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("notes.sqlite");

        let store = NoteStore::new(&path);
        store.insert("a").await.unwrap();
        store.insert("b").await.unwrap();
        drop(store);

        let reopened = NoteStore::new(&path);
        let texts = reopened
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|note| note.text)
            .collect::<Vec<_>>();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported_and_not_cached() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("notes.sqlite");
        std::fs::write(&path, "garbage, not sqlite ".repeat(64)).unwrap();

        let store = NoteStore::new(&path);
        let err = store.list_all().await.unwrap_err();
        assert!(matches!(err, Error::StorageInit(_)), "got {err:?}");
        assert!(!store.is_initialized());

        std::fs::remove_file(&path).unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_note_behind() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();

        let store = NoteStore::new(blocker.join("notes.sqlite"));
        let err = store.insert("ghost").await.unwrap_err();
        assert!(matches!(err, Error::StorageWrite(_)), "got {err:?}");
        assert!(store.list_all().await.unwrap().is_empty());

        // Still failing, and still not leaking rows.
        assert!(store.insert("again").await.is_err());
        assert!(store.list_all().await.unwrap().is_empty());
    }
}
