//! Backend runtime for the desktop application
//!
//! The notes store and the TCP demo listener run on their own tokio runtime.
//! UI components only ever see the process-wide [`BoundaryHandle`].

use std::sync::OnceLock;

use scaffold_core::boundary;
use scaffold_core::{AppConfig, BoundaryHandle, NoteStore, NotesService};
use tokio::runtime::{Builder, Runtime};

/// Handle registered by the first [`BackendRuntime::start`]
static BACKEND: OnceLock<BoundaryHandle> = OnceLock::new();

/// Owns the backend runtime; dropping it stops the backend
pub struct BackendRuntime {
    _runtime: Runtime,
}

impl BackendRuntime {
    /// Start the backend and register its handle for [`backend`]
    pub fn start(config: &AppConfig) -> std::io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("scaffold-backend")
            .enable_all()
            .build()?;

        let service = NotesService::new(NoteStore::new(config.db_path()));
        let (backend, handle) = boundary::connect(service, config.tcp.clone());
        runtime.spawn(backend.run());

        if BACKEND.set(handle).is_err() {
            tracing::warn!("Backend handle already registered; keeping the first one");
        }

        Ok(Self { _runtime: runtime })
    }
}

/// The registered boundary handle, if the backend was started
pub fn backend() -> Option<BoundaryHandle> {
    BACKEND.get().cloned()
}
