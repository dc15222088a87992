//! OpenAI Whisper transcription backend

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use semvault_core::error::{Error, Result};
use semvault_core::limiter::transcription_limiter;
use semvault_core::transcription::Transcriber;
use semvault_core::types::FileUpload;

use crate::HttpConfig;

const WHISPER_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const WHISPER_MODEL: &str = "whisper-1";
const WHISPER_LANGUAGE: &str = "en";

/// OpenAI Whisper API client
///
/// Fixed to the `whisper-1` model, English, plain-text responses. Every
/// dispatch in the process goes through the shared single-slot limiter, so
/// transcription traffic never exceeds one in-flight request with at least
/// 50 ms between dispatches, regardless of how many clients exist.
pub struct WhisperClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WhisperClient {
    /// Create from API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, WHISPER_API_URL)
    }

    /// Create from environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY not set".to_string()))?;
        Self::new(api_key)
    }

    /// Create with custom endpoint URL (for compatible APIs)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let config = HttpConfig::default();
        let client = config.build_client()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        })
    }

    fn build_form(audio: &FileUpload) -> Result<Form> {
        let part = Part::bytes(audio.bytes().to_vec()).file_name(audio.file_name().to_string());

        Ok(Form::new()
            .part("file", part)
            .text("model", WHISPER_MODEL)
            .text("language", WHISPER_LANGUAGE)
            .text("response_format", "text"))
    }
}

#[async_trait]
impl Transcriber for WhisperClient {
    async fn transcribe(&self, audio: &FileUpload) -> Result<String> {
        let _permit = transcription_limiter().acquire().await;
        tracing::debug!(file = audio.file_name(), "dispatching transcription");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .multipart(Self::build_form(audio)?)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Transcription(format!(
                "Whisper API error {}: {}",
                status, text
            )));
        }

        Ok(response.text().await?)
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}
