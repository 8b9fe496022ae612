//! Upload dialog state: patient context, chosen file and upload progress.

use tracing::{debug, warn};

use crate::error::{CollaboratorError, UploadError};

/// A file picked by the user, read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct ChosenFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ChosenFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for ChosenFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChosenFile")
            .field("name", &self.name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// What the uploader receives: the patient-context caption and the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    pub caption: String,
    pub file: ChosenFile,
}

/// Acknowledgement from the uploader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Service-assigned reference for the stored ECG.
    pub reference: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
}

/// State behind the upload dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    /// Free-form patient context, not validated.
    pub patient_info: String,
    pub file: Option<ChosenFile>,
    pub status: UploadStatus,
    /// Inline error from the last failed upload.
    pub error: Option<String>,
    /// Reference of the last successful upload.
    pub last_receipt: Option<UploadReceipt>,
}

impl UploadState {
    pub fn set_patient_info(&mut self, text: impl Into<String>) {
        self.patient_info = text.into();
    }

    /// Stores the picked file. Ignored while an upload is in flight, so a
    /// completing upload only ever clears the file it sent.
    pub fn choose_file(&mut self, file: ChosenFile) -> bool {
        if self.is_uploading() {
            debug!(name = %file.name, "Ignoring file pick during upload");
            return false;
        }
        debug!(name = %file.name, size = file.size(), "File chosen for upload");
        self.file = Some(file);
        self.error = None;
        true
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Builds the request for the uploader and marks the upload in flight.
    pub fn begin_upload(&mut self) -> Result<UploadRequest, UploadError> {
        if self.is_uploading() {
            return Err(UploadError::InProgress);
        }
        let file = self.file.clone().ok_or(UploadError::NoFileChosen)?;
        self.status = UploadStatus::Uploading;
        self.error = None;
        Ok(UploadRequest {
            caption: self.patient_info.clone(),
            file,
        })
    }

    /// Applies the uploader's outcome. Returns true on success.
    ///
    /// Success clears the caption and file; failure keeps both.
    pub fn finish_upload(&mut self, result: Result<UploadReceipt, CollaboratorError>) -> bool {
        self.status = UploadStatus::Idle;
        match result {
            Ok(receipt) => {
                debug!(reference = %receipt.reference, "Upload complete");
                self.patient_info.clear();
                self.file = None;
                self.error = None;
                self.last_receipt = Some(receipt);
                true
            }
            Err(e) => {
                warn!(error = %e, "Upload failed");
                self.error = Some(e.to_string());
                false
            }
        }
    }
}
