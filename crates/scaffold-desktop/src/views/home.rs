//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{Counter, NotesDemo, TcpMessages};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Home view component - the main application screen
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let last_error = (state.last_error)();
    let colors = PALETTE;

    let error_banner = last_error.map(|error| {
        rsx! {
            div {
                class: "error-banner",
                style: "
                    padding: 8px 12px;
                    margin-bottom: 16px;
                    border: 1px solid #f5c2c7;
                    border-radius: 6px;
                    background: #f8d7da;
                    color: #842029;
                ",
                "{error}"
            }
        }
    });

    rsx! {
        div {
            class: "home-container",
            style: "max-width: 640px; margin: 0 auto; padding: 24px;",

            h1 { style: "margin: 0 0 12px 0;", "Hello World!" }
            p {
                style: "margin: 0 0 24px 0; color: {colors.text_muted};",
                "Welcome to your Scaffold desktop application."
            }

            {error_banner}

            Counter {}
            NotesDemo {}
            TcpMessages {}
        }
    }
}
