//! Slide-over chat panel.
//!
//! Messages go through the injected `MessageSender`. With the demo sender
//! the input is inert: nothing is sent and nothing is appended.

use dioxus::prelude::*;
use teqdr_core::{Collaborators, ReviewState};

#[component]
pub fn ChatPanel(mut state: Signal<ReviewState>) -> Element {
    let collaborators = use_context::<Collaborators>();

    let s = state.read();
    if !s.chat_open {
        return rsx! {};
    }
    let transcript = s.chat.transcript.clone();
    let draft = s.chat.draft.clone();
    let sending = s.chat.is_sending();
    let error = s.chat.error.clone();
    drop(s);

    let enabled = collaborators.sender.is_enabled();
    let draft_empty = draft.trim().is_empty();

    let send = {
        let sender = collaborators.sender.clone();
        move || {
            if !sender.is_enabled() {
                return;
            }
            let message = state.write().chat.begin_send();
            let Some(message) = message else { return; };
            let sender = sender.clone();
            spawn(async move {
                let result = sender.send(&message).await;
                state.write().chat.finish_send(&message, result);
            });
        }
    };
    let mut send_on_enter = send.clone();
    let mut send_on_click = send.clone();
    let mut send_on_retry = send;

    rsx! {
        div {
            class: "chat-backdrop",
            onclick: move |_| state.write().set_chat_open(false),
        }

        aside {
            class: "chat-sheet",

            div {
                class: "chat-sheet-header",
                h2 { class: "panel-title", "Chat" }
                button {
                    class: "btn btn-ghost btn-icon",
                    title: "Close chat",
                    onclick: move |_| state.write().set_chat_open(false),
                    "\u{2715}"
                }
            }

            div {
                class: "chat-transcript",
                for (i, entry) in transcript.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: if entry.is_me { "chat-entry card chat-entry-mine" } else { "chat-entry card" },
                        div { class: "chat-entry-author", "{entry.author}" }
                        div { class: "chat-entry-body", "{entry.body}" }
                    }
                }
            }

            if let Some(err) = error {
                div {
                    class: "chat-error",
                    span { "{err}" }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| send_on_retry(),
                        "Retry"
                    }
                    button {
                        class: "btn btn-ghost btn-icon",
                        onclick: move |_| state.write().chat.dismiss_error(),
                        "\u{2717}"
                    }
                }
            }

            div {
                class: "chat-compose",

                input {
                    class: "text-input",
                    placeholder: "Type your message...",
                    value: "{draft}",
                    disabled: sending,
                    oninput: move |evt| state.write().chat.set_draft(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter && !evt.modifiers().shift() {
                            evt.prevent_default();
                            send_on_enter();
                        }
                    },
                }

                button {
                    class: "btn btn-ghost btn-icon",
                    title: "Voice input is not available",
                    disabled: true,
                    "\u{1f3a4}"
                }

                if enabled {
                    button {
                        class: "btn",
                        disabled: draft_empty || sending,
                        onclick: move |_| send_on_click(),
                        if sending { "Sending..." } else { "Send" }
                    }
                }
            }
        }
    }
}
