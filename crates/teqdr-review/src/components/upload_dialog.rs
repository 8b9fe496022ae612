//! Modal for uploading a new ECG with patient context.
//!
//! Follows the overlay pattern: backdrop click closes, clicks inside the
//! dialog stop propagating. File choice and upload only do anything when
//! the injected `FileUploader` is enabled.

use dioxus::prelude::*;
use teqdr_core::{ChosenFile, Collaborators, ReviewState};

/// Image types offered by the file picker.
const ECG_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

#[component]
pub fn UploadDialog(mut state: Signal<ReviewState>) -> Element {
    let collaborators = use_context::<Collaborators>();

    let s = state.read();
    if !s.upload_open {
        return rsx! {};
    }
    let patient_info = s.upload.patient_info.clone();
    let file_label = s
        .upload
        .file
        .as_ref()
        .map(|f| format!("{} ({} bytes)", f.name, f.size()));
    let uploading = s.upload.is_uploading();
    let error = s.upload.error.clone();
    drop(s);

    let uploader = collaborators.uploader.clone();
    let enabled = uploader.is_enabled();

    let on_choose = move |_: MouseEvent| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .set_title("Choose an ECG")
                .add_filter("ECG image", ECG_EXTENSIONS)
                .pick_file()
                .await;
            let Some(handle) = picked else { return; };
            let bytes = handle.read().await;
            state
                .write()
                .upload
                .choose_file(ChosenFile::new(handle.file_name(), bytes));
        });
    };

    let on_upload = move |_: MouseEvent| {
        let request = state.write().upload.begin_upload();
        match request {
            Ok(request) => {
                tracing::info!(file = %request.file.name, "Uploading ECG");
                let uploader = uploader.clone();
                spawn(async move {
                    let result = uploader.upload(request).await;
                    state.write().finish_upload(result);
                });
            }
            Err(e) => {
                state.write().upload.error = Some(e.to_string());
            }
        }
    };

    rsx! {
        div {
            class: "dialog-overlay",
            onclick: move |_| state.write().set_upload_open(false),

            div {
                class: "dialog card",
                role: "dialog",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "dialog-header",
                    h2 { class: "panel-title", "Upload New ECG" }
                    button {
                        class: "btn btn-ghost btn-icon",
                        title: "Close",
                        onclick: move |_| state.write().set_upload_open(false),
                        "\u{2715}"
                    }
                }

                label {
                    class: "dialog-label",
                    r#for: "patient-info",
                    "Patient information"
                }
                textarea {
                    id: "patient-info",
                    class: "text-input dialog-textarea",
                    placeholder: "Age, sex, symptoms, relevant history...",
                    value: "{patient_info}",
                    rows: "4",
                    disabled: uploading,
                    oninput: move |evt| state.write().upload.set_patient_info(evt.value()),
                }

                div {
                    class: "dropzone",

                    if let Some(label) = file_label {
                        span { class: "dropzone-file", "{label}" }
                    }

                    button {
                        class: "btn btn-outline",
                        disabled: !enabled || uploading,
                        onclick: on_choose,
                        "\u{2b06} Choose File"
                    }
                    button {
                        class: "btn",
                        disabled: !enabled || uploading,
                        onclick: on_upload,
                        if uploading { "Uploading..." } else { "Upload" }
                    }
                }

                if let Some(err) = error {
                    div { class: "dialog-error", "{err}" }
                }

                if !enabled {
                    p {
                        class: "dialog-hint",
                        "Uploads are not connected in this build."
                    }
                }
            }
        }
    }
}
