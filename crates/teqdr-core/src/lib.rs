//! Core model for the TEQDR ECG review screen
//!
//! This crate holds everything about the review screen that does not depend
//! on a UI toolkit:
//!
//! - [`Catalog`]: the ordered, read-only set of ECG [`Record`]s, loaded
//!   through a [`CatalogProvider`]
//! - [`ReviewState`]: the selected record, overlay visibility and the
//!   chat/upload sub-states
//! - [`MessageSender`] and [`FileUploader`]: injected collaborators for the
//!   chat and upload overlays, with no-op implementations for the demo build

pub mod catalog;
pub mod chat;
pub mod collaborators;
pub mod error;
pub mod sample;
pub mod state;
pub mod upload;

pub use catalog::{Catalog, CatalogProvider, JsonCatalogFile, Record, SampleCatalog, normalize_interpretation};
pub use chat::{ChatEntry, ChatState, ChatStatus};
pub use collaborators::{Collaborators, FileUploader, MessageSender, NoopFileUploader, NoopMessageSender};
pub use error::{CatalogError, CollaboratorError, StateError, UploadError};
pub use sample::{sample_records, sample_transcript};
pub use state::{InterpretationMode, ListEntry, ReviewState};
pub use upload::{ChosenFile, UploadReceipt, UploadRequest, UploadState, UploadStatus};
