//! Client wiring tests (without needing API keys or a live service)
//!
//! Run with: cargo test --package semvault-client

use std::sync::Arc;

use crate::mock::MockTranscriber;
use crate::{Error, FileUpload, Semvault, StoreFile};

#[test]
fn test_client_creation() {
    let client = Semvault::new("test-key");
    assert!(client.is_ok());
}

#[test]
fn test_client_with_transcription_key() -> anyhow::Result<()> {
    let client = Semvault::new("test-key")?.with_transcription_key("openai-key")?;
    drop(client);
    Ok(())
}

#[tokio::test]
async fn store_audio_runs_through_the_configured_transcriber() {
    // Unroutable base URL: reaching the HTTP error proves the transcription
    // step succeeded and the transcript was handed to the store call.
    let client = Semvault::new("test-key")
        .unwrap()
        .with_base_url("http://127.0.0.1:1")
        .with_transcriber(Arc::new(MockTranscriber::new("hello world")));

    let file = FileUpload::new("note.wav", vec![0u8; 16]);
    let res = client.store_audio(StoreFile::new("d1", "c1", file)).await;
    assert!(matches!(res, Err(Error::Http(_))));
}

#[tokio::test]
async fn clones_share_the_transcription_backend() {
    let client = Semvault::new("test-key")
        .unwrap()
        .with_base_url("http://127.0.0.1:1")
        .with_transcriber(Arc::new(MockTranscriber::new("copy")));

    let clone = client.clone();
    let file = FileUpload::new("note.wav", vec![0u8; 16]);
    let res = clone.store_audio(StoreFile::new("d1", "c1", file)).await;

    // Transcription succeeds on the clone; only the store dispatch fails.
    assert!(matches!(res, Err(Error::Http(_))));
}
