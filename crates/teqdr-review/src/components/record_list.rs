//! Record list: one selectable card per catalog record.

use dioxus::prelude::*;
use teqdr_core::ListEntry;

use super::EcgImage;

/// Left column listing every record in catalog order.
///
/// Selection is owned by the parent; this component only reports which
/// label was activated.
#[component]
pub fn RecordList(entries: Vec<ListEntry>, on_select: EventHandler<String>) -> Element {
    rsx! {
        section {
            class: "record-list card",

            div {
                class: "panel-header",
                h2 { class: "panel-title", "ECG List" }
                span { class: "panel-count", "{entries.len()} records" }
            }

            div {
                class: "record-list-scroll",
                role: "listbox",
                for entry in entries.iter() {
                    RecordCard {
                        key: "{entry.label}",
                        entry: entry.clone(),
                        on_select,
                    }
                }
            }
        }
    }
}

/// A single record card with label and thumbnail.
#[component]
fn RecordCard(entry: ListEntry, on_select: EventHandler<String>) -> Element {
    let card_class = if entry.is_selected {
        "record-card card record-card-selected"
    } else {
        "record-card card"
    };
    let label = entry.label.clone();
    let key_label = entry.label.clone();

    rsx! {
        div {
            class: "{card_class}",
            role: "option",
            tabindex: "0",
            "aria-selected": "{entry.is_selected}",
            onclick: move |_| on_select.call(label.clone()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter || evt.key() == Key::Character(" ".to_string()) {
                    evt.prevent_default();
                    on_select.call(key_label.clone());
                }
            },

            h3 { class: "record-card-title", "{entry.label}" }

            EcgImage {
                image: entry.image.clone(),
                alt: format!("{} thumbnail", entry.label),
                thumbnail: true,
            }
        }
    }
}
