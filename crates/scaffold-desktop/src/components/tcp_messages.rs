//! Feed of push messages from the TCP demo listener

use dioxus::prelude::*;
use tokio::sync::broadcast::error::RecvError;

use crate::state::AppState;
use crate::theme::PALETTE;

/// Subscribes to the push channel once and lists every message received
#[component]
pub fn TcpMessages() -> Element {
    let mut state = use_context::<AppState>();
    let messages = (state.push_messages)();
    let colors = PALETTE;

    use_future(move || async move {
        let Some(handle) = (state.backend)() else {
            return;
        };
        let mut receiver = match handle.on_push() {
            Ok(receiver) => receiver,
            Err(e) => {
                state.report_error("Failed to subscribe to TCP events", &e);
                return;
            }
        };

        loop {
            match receiver.recv().await {
                Ok(message) => {
                    tracing::debug!("Push message {} ({})", message.id, message.kind.as_str());
                    state.push_messages.write().push(message);
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("Dropped {} push messages", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let card_style = format!(
        "padding: 16px; border: 1px solid {}; border-radius: 8px; background: {};",
        colors.border, colors.bg_primary
    );

    if messages.is_empty() {
        return rsx! {
            div {
                class: "tcp-demo-card",
                style: "{card_style}",
                h2 { style: "font-size: 18px; margin: 0 0 8px 0;", "TCP demo" }
                p {
                    style: "margin: 0; color: {colors.text_muted};",
                    "Waiting for TCP events from the backend..."
                }
            }
        };
    }

    rsx! {
        div {
            class: "tcp-demo-card",
            style: "{card_style}",
            h2 { style: "font-size: 18px; margin: 0 0 8px 0;", "TCP demo" }
            p {
                style: "margin: 0 0 12px 0; color: {colors.text_muted};",
                "Messages received from the TCP service:"
            }

            ul {
                class: "tcp-demo-list",
                style: "list-style: none; margin: 0; padding: 0;",

                for message in messages {
                    {
                        let kind = message.kind.as_str();
                        let payload = message.pretty_payload();

                        rsx! {
                            li {
                                key: "{message.id}",
                                class: "tcp-demo-item",
                                style: "margin-bottom: 12px;",

                                div {
                                    style: "display: flex; gap: 8px; align-items: center; margin-bottom: 4px;",
                                    span {
                                        class: "tcp-demo-badge",
                                        style: "
                                            padding: 2px 8px;
                                            border-radius: 10px;
                                            font-size: 12px;
                                            background: {colors.accent};
                                            color: {colors.accent_text};
                                        ",
                                        "{kind}"
                                    }
                                    span {
                                        style: "font-size: 12px; color: {colors.text_muted};",
                                        "{message.timestamp}"
                                    }
                                }
                                pre {
                                    style: "
                                        margin: 0;
                                        padding: 8px;
                                        border-radius: 6px;
                                        background: {colors.bg_secondary};
                                        font-size: 12px;
                                    ",
                                    "{payload}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
