//! Mock transcriber for testing

use async_trait::async_trait;

use semvault_core::error::Result;
use semvault_core::types::FileUpload;

use crate::Transcriber;

/// A mock transcriber for testing
pub struct MockTranscriber {
    /// Transcript to return
    transcript: String,
}

impl MockTranscriber {
    /// Create a new mock transcriber with a predefined transcript
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, _audio: &FileUpload) -> Result<String> {
        Ok(self.transcript.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transcriber() {
        let transcriber = MockTranscriber::new("hello world");
        let audio = FileUpload::new("note.wav", vec![0u8; 8]);

        let transcript = transcriber
            .transcribe(&audio)
            .await
            .expect("should succeed");
        assert_eq!(transcript, "hello world");
        assert_eq!(transcriber.name(), "mock");
    }
}
