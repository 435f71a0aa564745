//! Main application component

use dioxus::prelude::*;

use crate::services::backend;
use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let count = use_signal(|| 0_i64);
    let notes = use_signal(Vec::new);
    let loading = use_signal(|| false);
    let sync_info = use_signal(|| None);
    let push_messages = use_signal(Vec::new);
    let last_error = use_signal(|| None);
    let backend = use_signal(backend);

    let mut state = use_context_provider(|| AppState {
        count,
        notes,
        loading,
        sync_info,
        push_messages,
        last_error,
        backend,
    });

    // Load notes once on startup
    use_future(move || async move {
        let Some(handle) = (state.backend)() else {
            state.last_error.set(Some("Backend is not running".to_string()));
            return;
        };

        state.loading.set(true);
        match handle.get_notes().await {
            Ok(loaded) => {
                tracing::info!("Loaded {} notes from the store", loaded.len());
                state.notes.set(loaded);
            }
            Err(e) => state.report_error("Failed to load notes", &e),
        }
        state.loading.set(false);
    });

    let colors = PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_secondary};
                color: {colors.text_primary};
            ",
            Home {}
        }
    }
}
