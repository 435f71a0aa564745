//! Offline notes demo component

use dioxus::prelude::*;
use scaffold_core::util::normalize_note_text;

use crate::state::AppState;
use crate::theme::PALETTE;

/// Whether the Add button should be enabled
fn can_add(text: &str, loading: bool) -> bool {
    !loading && normalize_note_text(text).is_some()
}

/// Note input, Add/Sync buttons and the list of stored notes
#[component]
pub fn NotesDemo() -> Element {
    let mut state = use_context::<AppState>();
    let mut text = use_signal(String::new);
    let loading = (state.loading)();
    let notes = (state.notes)();
    let sync_info = (state.sync_info)();
    let colors = PALETTE;

    let add_enabled = can_add(&text(), loading);

    let add_note = move |_| {
        let Some(content) = normalize_note_text(&text.read()) else {
            return;
        };
        let Some(handle) = (state.backend)() else {
            return;
        };

        spawn(async move {
            state.loading.set(true);
            match handle.add_note(&content).await {
                Ok(note) => {
                    tracing::info!("Added note {}", note.id);
                    state.notes.write().push(note);
                    text.set(String::new());
                }
                Err(e) => state.report_error("Failed to add note", &e),
            }
            state.loading.set(false);
        });
    };

    let sync_notes = move |_| {
        let Some(handle) = (state.backend)() else {
            return;
        };

        spawn(async move {
            state.loading.set(true);
            match handle.sync().await {
                Ok(result) => state.sync_info.set(Some(result.summary())),
                Err(e) => state.report_error("Sync failed", &e),
            }
            state.loading.set(false);
        });
    };

    let sync_banner = sync_info.map(|info| {
        rsx! {
            div {
                class: "sync-info",
                style: "
                    padding: 8px 12px;
                    margin-bottom: 12px;
                    border-radius: 6px;
                    background: {colors.info_bg};
                ",
                "{info}"
            }
        }
    });

    rsx! {
        div {
            class: "notes-demo",
            style: "margin-bottom: 24px;",

            h2 { style: "font-size: 18px; margin: 0 0 8px 0;", "Offline notes demo (local SQLite)" }
            p {
                style: "margin: 0 0 12px 0; color: {colors.text_muted};",
                "Notes are stored locally in a SQLite file. The Sync button calls a placeholder sync to illustrate the pattern."
            }

            div {
                style: "display: flex; gap: 8px; margin-bottom: 12px;",

                input {
                    r#type: "text",
                    style: "
                        flex: 1;
                        padding: 6px 10px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                    ",
                    placeholder: "Add a note...",
                    value: "{text}",
                    disabled: loading,
                    oninput: move |evt| text.set(evt.value()),
                }
                button {
                    style: "
                        padding: 6px 14px;
                        border: none;
                        border-radius: 6px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                    ",
                    disabled: !add_enabled,
                    onclick: add_note,
                    "Add"
                }
                button {
                    style: "
                        padding: 6px 14px;
                        border: 1px solid {colors.border};
                        border-radius: 6px;
                        background: {colors.bg_primary};
                    ",
                    disabled: loading,
                    onclick: sync_notes,
                    "Sync"
                }
            }

            {sync_banner}

            if loading {
                div { style: "color: {colors.text_muted};", "Loading..." }
            }

            ul {
                class: "note-list",
                style: "
                    list-style: none;
                    margin: 8px 0 0 0;
                    padding: 0;
                    border: 1px solid {colors.border};
                    border-radius: 6px;
                    background: {colors.bg_primary};
                ",

                for note in notes.iter() {
                    li {
                        key: "{note.id}",
                        style: "
                            display: flex;
                            flex-direction: column;
                            padding: 8px 12px;
                            border-bottom: 1px solid {colors.border};
                        ",
                        span { "{note.text}" }
                        small { style: "color: {colors.text_muted};", "{note.created_at}" }
                    }
                }

                if notes.is_empty() && !loading {
                    li {
                        style: "padding: 8px 12px; color: {colors.text_muted};",
                        "No notes yet."
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_non_blank_text() {
        assert!(can_add("hello", false));
        assert!(!can_add("   ", false));
        assert!(!can_add("", false));
    }

    #[test]
    fn add_disabled_while_loading() {
        assert!(!can_add("hello", true));
    }
}
