use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use teqdr_core::*;

// ----------------------------------------------------------------------------
// Fixtures
// ----------------------------------------------------------------------------

fn three_record_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            Record::new("ECG 1", "ecg1.jpeg", "T1"),
            Record::new("ECG 2", "ecg2.jpeg", "T2"),
            Record::new("ECG 3", "ecg3.jpeg", "T3"),
        ])
        .unwrap(),
    )
}

/// Sender that echoes an acknowledgement, or fails on demand.
struct EchoSender {
    fail: bool,
}

#[async_trait]
impl MessageSender for EchoSender {
    async fn send(&self, message: &str) -> Result<Vec<ChatEntry>, CollaboratorError> {
        if self.fail {
            return Err(CollaboratorError::Failed("connection reset".into()));
        }
        Ok(vec![ChatEntry::new("Teqdr", format!("Received: {message}"))])
    }
}

/// Uploader that records every request it receives.
#[derive(Default)]
struct RecordingUploader {
    received: Mutex<Vec<UploadRequest>>,
}

#[async_trait]
impl FileUploader for RecordingUploader {
    async fn upload(&self, request: UploadRequest) -> Result<UploadReceipt, CollaboratorError> {
        let mut received = self.received.lock().unwrap();
        received.push(request);
        Ok(UploadReceipt {
            reference: format!("ecg-{}", received.len()),
        })
    }
}

// ----------------------------------------------------------------------------
// Selection
// ----------------------------------------------------------------------------

#[test]
fn test_selecting_each_label_shows_its_record() {
    let catalog = three_record_catalog();
    let mut state = ReviewState::new(catalog.clone());

    for record in catalog.records() {
        state.select(&record.label).unwrap();
        let shown = state.selected_record();
        assert_eq!(shown.image, record.image);
        assert_eq!(shown.interpretation, record.interpretation);
    }
}

#[test]
fn test_select_ecg3_then_ecg1_shows_t1() {
    let mut state = ReviewState::new(three_record_catalog());

    state.select("ECG 3").unwrap();
    state.select("ECG 1").unwrap();

    let shown = &state.selected_record().interpretation;
    assert_eq!(shown, "T1");
    assert_ne!(shown, "T2");
    assert_ne!(shown, "T3");

    let marks: Vec<(String, bool)> = state
        .list_entries()
        .into_iter()
        .map(|e| (e.label, e.is_selected))
        .collect();
    assert_eq!(
        marks,
        vec![
            ("ECG 1".to_string(), true),
            ("ECG 2".to_string(), false),
            ("ECG 3".to_string(), false),
        ]
    );
}

#[test]
fn test_initial_state_uses_first_declared_label() {
    let catalog = Arc::new(
        Catalog::new(vec![
            Record::new("Zeta", "z.png", "z"),
            Record::new("Alpha", "a.png", "a"),
        ])
        .unwrap(),
    );
    let state = ReviewState::new(catalog);
    assert_eq!(state.selected_label(), "Zeta");
    assert!(state.chat_open);
    assert!(!state.upload_open);
}

// ----------------------------------------------------------------------------
// Collaborators driving the state machine
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_chat_round_trip_with_enabled_sender() {
    let sender = EchoSender { fail: false };
    let mut state = ReviewState::new(three_record_catalog()).with_transcript(sample_transcript());
    let before = state.chat.transcript.len();

    state.chat.set_draft("Please flag the PR interval");
    let message = state.chat.begin_send().unwrap();
    let result = sender.send(&message).await;
    state.chat.finish_send(&message, result);

    assert_eq!(state.chat.transcript.len(), before + 2);
    assert_eq!(
        state.chat.transcript.last().unwrap().body,
        "Received: Please flag the PR interval"
    );
    assert!(state.chat.draft.is_empty());
}

#[tokio::test]
async fn test_chat_failure_keeps_draft_for_retry() {
    let sender = EchoSender { fail: true };
    let mut state = ReviewState::new(three_record_catalog());

    state.chat.set_draft("retry me");
    let message = state.chat.begin_send().unwrap();
    let result = sender.send(&message).await;
    state.chat.finish_send(&message, result);

    assert_eq!(state.chat.draft, "retry me");
    assert!(state.chat.error.is_some());
    assert!(state.chat.begin_send().is_some());
}

#[tokio::test]
async fn test_upload_hands_caption_and_file_to_uploader() {
    let uploader = RecordingUploader::default();
    let mut state = ReviewState::new(three_record_catalog());
    state.set_upload_open(true);
    state.upload.set_patient_info("58F, palpitations");
    state
        .upload
        .choose_file(ChosenFile::new("ecg4.jpeg", vec![0xd8, 0xff]));

    let request = state.upload.begin_upload().unwrap();
    let result = uploader.upload(request).await;
    state.finish_upload(result);

    let received = uploader.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].caption, "58F, palpitations");
    assert_eq!(received[0].file.name, "ecg4.jpeg");

    assert!(!state.upload_open);
    assert!(state.upload.patient_info.is_empty());
    assert_eq!(
        state.upload.last_receipt.as_ref().map(|r| r.reference.as_str()),
        Some("ecg-1")
    );
}

#[tokio::test]
async fn test_demo_collaborators_leave_state_untouched() {
    let collaborators = Collaborators::demo();
    let mut state = ReviewState::new(three_record_catalog()).with_transcript(sample_transcript());

    assert!(!collaborators.sender.is_enabled());
    assert!(!collaborators.uploader.is_enabled());

    state.chat.set_draft("hello");
    let message = state.chat.begin_send().unwrap();
    let result = collaborators.sender.send(&message).await;
    state.chat.finish_send(&message, result);

    assert_eq!(state.chat.transcript, sample_transcript());
    assert_eq!(state.chat.draft, "hello");
}
