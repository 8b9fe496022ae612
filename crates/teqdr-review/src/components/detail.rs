//! Detail pane showing the selected record's trace and interpretation.

use dioxus::prelude::*;
use teqdr_core::{InterpretationMode, Record};
use teqdr_ui::{RenderedBody, render_interpretation};

use super::EcgImage;

#[component]
pub fn DetailPane(
    record: Record,
    mode: InterpretationMode,
    on_toggle_mode: EventHandler<()>,
) -> Element {
    let body = match mode {
        InterpretationMode::Rendered => render_interpretation(&record.interpretation),
        InterpretationMode::Raw => RenderedBody::Plain(record.interpretation.clone()),
    };
    let content = match body {
        RenderedBody::Html(html) => rsx! {
            div { class: "markdown-rendered", dangerous_inner_html: "{html}" }
        },
        RenderedBody::Plain(text) => rsx! {
            pre { class: "markdown-raw", "{text}" }
        },
    };

    rsx! {
        section {
            class: "detail-pane card",

            div {
                class: "panel-header",
                h2 {
                    class: "panel-title",
                    "Draft Interpretation of {record.label}"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_toggle_mode.call(()),
                    if mode == InterpretationMode::Rendered { "View Raw" } else { "View Rendered" }
                }
            }

            div {
                class: "detail-scroll",

                EcgImage {
                    image: record.image.clone(),
                    alt: format!("{} trace", record.label),
                }

                {content}
            }

            button {
                class: "btn detail-report-btn",
                disabled: true,
                title: "Report generation is not connected",
                "Generate Report"
            }
        }
    }
}
