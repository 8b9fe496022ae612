//! View state for the review screen.
//!
//! One `ReviewState` lives for the lifetime of the window. The selected
//! record is stored as a catalog position so it can never name a record
//! that does not exist.

use std::sync::Arc;

use tracing::debug;

use crate::catalog::{Catalog, Record};
use crate::chat::{ChatEntry, ChatState};
use crate::error::{CollaboratorError, StateError};
use crate::upload::{UploadReceipt, UploadState};

/// How the interpretation body is displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InterpretationMode {
    /// Markdown rendered to rich text.
    #[default]
    Rendered,
    /// The body as written.
    Raw,
}

impl InterpretationMode {
    pub fn toggled(self) -> Self {
        match self {
            InterpretationMode::Rendered => InterpretationMode::Raw,
            InterpretationMode::Raw => InterpretationMode::Rendered,
        }
    }
}

/// One row of the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub label: String,
    pub image: String,
    pub is_selected: bool,
}

/// Main view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewState {
    catalog: Arc<Catalog>,
    selected: usize,

    /// Whether the chat slide-over is open.
    pub chat_open: bool,

    /// Whether the upload dialog is open.
    pub upload_open: bool,

    pub interpretation_mode: InterpretationMode,

    pub chat: ChatState,

    pub upload: UploadState,
}

impl ReviewState {
    /// Creates the initial state: first record selected, chat open,
    /// upload dialog closed.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            selected: 0,
            chat_open: true,
            upload_open: false,
            interpretation_mode: InterpretationMode::default(),
            chat: ChatState::default(),
            upload: UploadState::default(),
        }
    }

    /// Seeds the chat transcript.
    pub fn with_transcript(mut self, transcript: Vec<ChatEntry>) -> Self {
        self.chat = ChatState::new(transcript);
        self
    }

    /// Overrides the initial chat panel visibility.
    pub fn with_chat_open(mut self, open: bool) -> Self {
        self.chat_open = open;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_label(&self) -> &str {
        &self.selected_record().label
    }

    /// The record shown in the detail pane.
    pub fn selected_record(&self) -> &Record {
        self.catalog.at(self.selected)
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected_label() == label
    }

    /// Selects the record with the given label.
    ///
    /// Unknown labels are rejected and leave the selection unchanged.
    pub fn select(&mut self, label: &str) -> Result<(), StateError> {
        let index = self
            .catalog
            .position(label)
            .ok_or_else(|| StateError::UnknownRecord(label.to_string()))?;
        if index != self.selected {
            debug!(from = %self.selected_label(), to = %label, "Record selected");
            self.selected = index;
        }
        Ok(())
    }

    /// Rows for the record list, in catalog order.
    pub fn list_entries(&self) -> Vec<ListEntry> {
        self.catalog
            .records()
            .iter()
            .enumerate()
            .map(|(i, r)| ListEntry {
                label: r.label.clone(),
                image: r.image.clone(),
                is_selected: i == self.selected,
            })
            .collect()
    }

    pub fn set_chat_open(&mut self, open: bool) {
        if self.chat_open != open {
            debug!(open, "Chat panel toggled");
            self.chat_open = open;
        }
    }

    pub fn toggle_chat(&mut self) {
        self.set_chat_open(!self.chat_open);
    }

    pub fn set_upload_open(&mut self, open: bool) {
        if self.upload_open != open {
            debug!(open, "Upload dialog toggled");
            self.upload_open = open;
        }
    }

    pub fn toggle_interpretation_mode(&mut self) {
        self.interpretation_mode = self.interpretation_mode.toggled();
    }

    /// Applies the uploader's outcome; closes the dialog on success.
    pub fn finish_upload(&mut self, result: Result<UploadReceipt, CollaboratorError>) {
        if self.upload.finish_upload(result) {
            self.set_upload_open(false);
        }
    }
}
