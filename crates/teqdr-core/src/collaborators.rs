//! External capabilities the review screen can be wired to.
//!
//! The demo build injects the no-op implementations, which report
//! themselves disabled so the UI can render the controls as inert.

use std::sync::Arc;

use async_trait::async_trait;

use crate::chat::ChatEntry;
use crate::error::CollaboratorError;
use crate::upload::{UploadReceipt, UploadRequest};

/// Sends chat messages to a messaging service.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Whether the sender is connected to a real service.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Sends a message and returns any transcript entries produced in reply.
    async fn send(&self, message: &str) -> Result<Vec<ChatEntry>, CollaboratorError>;
}

/// Hands a captioned file to an upload service.
#[async_trait]
pub trait FileUploader: Send + Sync {
    /// Whether the uploader is connected to a real service.
    fn is_enabled(&self) -> bool {
        true
    }

    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, CollaboratorError>;
}

/// Message sender that is never connected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMessageSender;

#[async_trait]
impl MessageSender for NoopMessageSender {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn send(&self, _message: &str) -> Result<Vec<ChatEntry>, CollaboratorError> {
        Err(CollaboratorError::Unavailable("chat service"))
    }
}

/// Uploader that is never connected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFileUploader;

#[async_trait]
impl FileUploader for NoopFileUploader {
    fn is_enabled(&self) -> bool {
        false
    }

    async fn upload(&self, _request: UploadRequest) -> Result<UploadReceipt, CollaboratorError> {
        Err(CollaboratorError::Unavailable("upload service"))
    }
}

/// The set of collaborators injected into the review screen.
#[derive(Clone)]
pub struct Collaborators {
    pub sender: Arc<dyn MessageSender>,
    pub uploader: Arc<dyn FileUploader>,
}

impl Collaborators {
    pub fn new(sender: Arc<dyn MessageSender>, uploader: Arc<dyn FileUploader>) -> Self {
        Self { sender, uploader }
    }

    /// No-op collaborators for the demo build.
    pub fn demo() -> Self {
        Self::new(Arc::new(NoopMessageSender), Arc::new(NoopFileUploader))
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::demo()
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("sender_enabled", &self.sender.is_enabled())
            .field("uploader_enabled", &self.uploader.is_enabled())
            .finish()
    }
}
