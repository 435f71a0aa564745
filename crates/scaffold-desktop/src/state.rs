//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use scaffold_core::{BoundaryHandle, Note, PushMessage};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Demo counter value
    pub count: Signal<i64>,
    /// Notes loaded from the store, ascending by id
    pub notes: Signal<Vec<Note>>,
    /// Whether a notes call is in flight
    pub loading: Signal<bool>,
    /// Summary of the last sync, once one ran
    pub sync_info: Signal<Option<String>>,
    /// Push messages received so far, oldest first
    pub push_messages: Signal<Vec<PushMessage>>,
    /// Last failed backend call, for display
    pub last_error: Signal<Option<String>>,
    /// Boundary handle, `None` if the backend failed to start
    pub backend: Signal<Option<BoundaryHandle>>,
}

impl AppState {
    pub fn increment(&mut self) {
        *self.count.write() += 1;
    }

    pub fn decrement(&mut self) {
        *self.count.write() -= 1;
    }

    /// Record a failed call
    pub fn report_error(&mut self, context: &str, error: &scaffold_core::Error) {
        tracing::error!("{}: {}", context, error);
        self.last_error.set(Some(format!("{context}: {error}")));
    }
}
