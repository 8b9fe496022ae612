//! Chat panel transcript and compose state.

use tracing::{debug, warn};

use crate::error::CollaboratorError;

/// Author name used for entries the local user sends.
pub const LOCAL_AUTHOR: &str = "You";

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub author: String,
    pub body: String,
    /// Whether the local user wrote this entry.
    pub is_me: bool,
}

impl ChatEntry {
    /// An entry from another participant.
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            body: body.into(),
            is_me: false,
        }
    }

    /// An entry sent by the local user.
    pub fn outgoing(body: impl Into<String>) -> Self {
        Self {
            author: LOCAL_AUTHOR.to_string(),
            body: body.into(),
            is_me: true,
        }
    }
}

/// Status of the chat panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChatStatus {
    #[default]
    Idle,
    Sending,
}

/// State for the chat panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatState {
    pub transcript: Vec<ChatEntry>,
    /// Current compose text.
    pub draft: String,
    pub status: ChatStatus,
    /// Inline error from the last failed send.
    pub error: Option<String>,
}

impl ChatState {
    pub fn new(transcript: Vec<ChatEntry>) -> Self {
        Self {
            transcript,
            ..Self::default()
        }
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_sending(&self) -> bool {
        self.status == ChatStatus::Sending
    }

    /// Starts sending the current draft.
    ///
    /// Returns the trimmed message to hand to the sender, or `None` when the
    /// draft is blank or a send is already in flight.
    pub fn begin_send(&mut self) -> Option<String> {
        if self.is_sending() {
            return None;
        }
        let message = self.draft.trim();
        if message.is_empty() {
            return None;
        }
        let message = message.to_string();
        self.status = ChatStatus::Sending;
        self.error = None;
        Some(message)
    }

    /// Applies the sender's outcome for `message`.
    ///
    /// On success the outgoing entry and replies are appended and the draft
    /// cleared. On failure the draft is kept so the user can retry.
    pub fn finish_send(
        &mut self,
        message: &str,
        result: Result<Vec<ChatEntry>, CollaboratorError>,
    ) {
        self.status = ChatStatus::Idle;
        match result {
            Ok(replies) => {
                debug!(replies = replies.len(), "Chat message sent");
                self.transcript.push(ChatEntry::outgoing(message));
                self.transcript.extend(replies);
                self.draft.clear();
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Chat message failed to send");
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_send_ignores_blank_draft() {
        let mut chat = ChatState::default();
        chat.set_draft("   ");
        assert_eq!(chat.begin_send(), None);
        assert_eq!(chat.status, ChatStatus::Idle);
    }

    #[test]
    fn test_begin_send_trims_and_blocks_second_send() {
        let mut chat = ChatState::default();
        chat.set_draft("  widen the QRS note  ");
        assert_eq!(chat.begin_send().as_deref(), Some("widen the QRS note"));
        assert!(chat.is_sending());
        assert_eq!(chat.begin_send(), None);
    }

    #[test]
    fn test_finish_send_success_appends_and_clears() {
        let mut chat = ChatState::new(vec![ChatEntry::new("Teqdr", "Hello")]);
        chat.set_draft("Looks good");
        let message = chat.begin_send().unwrap();
        chat.finish_send(&message, Ok(vec![ChatEntry::new("Teqdr", "Noted.")]));

        assert_eq!(chat.transcript.len(), 3);
        assert_eq!(chat.transcript[1], ChatEntry::outgoing("Looks good"));
        assert!(chat.transcript[1].is_me);
        assert_eq!(chat.transcript[2].body, "Noted.");
        assert!(chat.draft.is_empty());
        assert_eq!(chat.status, ChatStatus::Idle);
    }

    #[test]
    fn test_finish_send_failure_keeps_draft() {
        let mut chat = ChatState::new(vec![ChatEntry::new("Teqdr", "Hello")]);
        chat.set_draft("Looks good");
        let message = chat.begin_send().unwrap();
        chat.finish_send(&message, Err(CollaboratorError::Failed("timeout".into())));

        assert_eq!(chat.transcript.len(), 1);
        assert_eq!(chat.draft, "Looks good");
        assert_eq!(chat.error.as_deref(), Some("request failed: timeout"));
        assert_eq!(chat.status, ChatStatus::Idle);

        chat.dismiss_error();
        assert!(chat.error.is_none());
    }
}
