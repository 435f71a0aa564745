//! Counter component

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::PALETTE;

/// `-` / value / `+`
#[component]
pub fn Counter() -> Element {
    let mut state = use_context::<AppState>();
    let count = (state.count)();
    let colors = PALETTE;

    let button_style = format!(
        "padding: 6px 14px; border: none; border-radius: 6px; cursor: pointer; \
         background: {}; color: {}; font-size: 16px;",
        colors.accent, colors.accent_text
    );

    rsx! {
        div {
            class: "counter",
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 24px;",

            button {
                style: "{button_style}",
                onclick: move |_| state.decrement(),
                "-"
            }
            span { style: "font-size: 20px; min-width: 32px; text-align: center;", "{count}" }
            button {
                style: "{button_style}",
                onclick: move |_| state.increment(),
                "+"
            }
        }
    }
}
