//! Speech-to-text abstraction
//!
//! The client facade stores audio by transcribing it first and then storing
//! the transcript as text. [`Transcriber`] is the seam that makes the
//! speech-to-text backend swappable (and mockable in tests).

use async_trait::async_trait;

use crate::error::Result;
use crate::types::FileUpload;

/// A speech-to-text backend
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file and return the plain transcript text
    async fn transcribe(&self, audio: &FileUpload) -> Result<String>;

    /// Backend name, used in logs
    fn name(&self) -> &'static str;
}
