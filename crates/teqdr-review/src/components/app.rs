//! Root component for the review screen.

use dioxus::prelude::*;
use teqdr_core::ReviewState;
use teqdr_ui::{ThemeSwitcher, ThemedRoot};

use super::{ChatPanel, DetailPane, RecordList, UploadDialog};

/// Review screen root.
///
/// Owns the view state. The list and detail pane receive values down and
/// report selection changes up; overlays toggle independently.
#[component]
pub fn App(initial: ReviewState) -> Element {
    let mut state = use_signal(|| initial);

    let s = state.read();
    let entries = s.list_entries();
    let record = s.selected_record().clone();
    let mode = s.interpretation_mode;
    drop(s);

    rsx! {
        ThemedRoot {
            div {
                class: "review-screen",

                Header {
                    on_new_ecg: move |_| state.write().set_upload_open(true),
                }

                main {
                    class: "review-columns",

                    RecordList {
                        entries,
                        on_select: move |label: String| {
                            if let Err(e) = state.write().select(&label) {
                                tracing::warn!(error = %e, "Ignoring selection");
                            }
                        },
                    }

                    DetailPane {
                        record,
                        mode,
                        on_toggle_mode: move |_| state.write().toggle_interpretation_mode(),
                    }
                }

                // Floating chat trigger
                button {
                    class: "btn btn-icon chat-fab",
                    title: "Open chat",
                    onclick: move |_| state.write().set_chat_open(true),
                    "\u{1f4ac}"
                }

                ChatPanel { state }
                UploadDialog { state }
            }
        }
    }
}

/// Header bar with title, theme switcher and the upload trigger.
#[component]
fn Header(on_new_ecg: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "header",

            h1 { class: "header-title", "ECG Interpretation for TEQDR" }

            div {
                class: "header-right",
                ThemeSwitcher {}
                button {
                    class: "btn btn-outline header-upload",
                    onclick: move |_| on_new_ecg.call(()),
                    "\u{2b06} New ECG"
                }
            }
        }
    }
}
