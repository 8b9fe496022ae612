//! Error types for the TEQDR review screen

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a record catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no records")]
    Empty,

    #[error("duplicate record label: {0}")]
    DuplicateLabel(String),

    #[error("record label must not be blank")]
    BlankLabel,

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by view-state transitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("no record labelled {0:?} in the catalog")]
    UnknownRecord(String),
}

/// Errors reported by external collaborators (chat service, uploader)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("{0} is not connected")]
    Unavailable(&'static str),

    #[error("request failed: {0}")]
    Failed(String),
}

/// Errors raised when starting an upload
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("choose a file before uploading")]
    NoFileChosen,

    #[error("an upload is already in progress")]
    InProgress,
}
