//! Database connection management
//!
//! The database lives entirely in memory. On open, an existing backing file is
//! copied into memory in one pass; after every write the whole in-memory image
//! is copied back over the file with [`Database::persist`].

use std::path::{Path, PathBuf};

use rusqlite::backup::Progress;
use rusqlite::{Connection, DatabaseName, Params, Row};

use super::migrations;
use crate::error::{Error, Result};

/// In-memory `SQLite` database with an optional backing file
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Load the database stored at `path`, or start an empty one if the file
    /// does not exist yet.
    ///
    /// Nothing is written until the first [`Database::persist`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut conn = Connection::open_in_memory()?;

        if path.exists() {
            conn.restore(DatabaseName::Main, &path, None::<fn(Progress)>)
                .map_err(|e| Error::StorageInit(format!("{}: {e}", path.display())))?;
            tracing::debug!("Loaded note store from {}", path.display());
        } else {
            tracing::debug!(
                "No note store at {}, starting with an empty one",
                path.display()
            );
        }

        let database = Self {
            conn,
            path: Some(path),
        };
        database
            .migrate()
            .map_err(|e| Error::StorageInit(e.to_string()))?;
        Ok(database)
    }

    /// Open an in-memory database with no backing file (useful for testing)
    pub fn open_in_memory() -> Result<Self> {
        let database = Self {
            conn: Connection::open_in_memory()?,
            path: None,
        };
        database.migrate()?;
        Ok(database)
    }

    /// Run database migrations
    fn migrate(&self) -> Result<()> {
        migrations::run(&self.conn)
    }

    /// Execute a statement, returning the number of changed rows
    pub fn run_statement<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Run a query and map every row with `map`
    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// Rowid of the most recent successful insert on this connection
    pub fn last_insert_id(&self) -> i64 {
        self.conn.last_insert_rowid()
    }

    /// Overwrite the backing file with the full in-memory image.
    ///
    /// No-op for databases without a backing file.
    pub fn persist(&self) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::StorageWrite(format!("{}: {e}", parent.display())))?;
        }

        self.conn
            .backup(DatabaseName::Main, path, None)
            .map_err(|e| Error::StorageWrite(format!("{}: {e}", path.display())))?;
        tracing::debug!("Wrote note store to {}", path.display());
        Ok(())
    }

    /// Backing file, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
