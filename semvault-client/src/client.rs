//! The Semvault API client facade

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use serde_json::Value;

use semvault_core::error::{Error, Result};
use semvault_core::transcription::Transcriber;
use semvault_core::types::ApiResponse;

use crate::whisper::WhisperClient;
use crate::HttpConfig;

const SEMVAULT_API_URL: &str = "https://connect.semvault.io/api";

/// Semvault API client
///
/// Owns a JSON transport and a multipart transport, both pre-configured
/// with the service base URL and a bearer-token header, plus an optional
/// transcription backend for audio storage. One method per remote
/// operation; see the `data`, `collections` and `smart` impl blocks.
///
/// Cloning is cheap and clones share the underlying connection pools.
#[derive(Clone)]
pub struct Semvault {
    http: reqwest::Client,
    http_file: reqwest::Client,
    api_key: String,
    base_url: String,
    transcriber: Option<Arc<dyn Transcriber>>,
}

impl Semvault {
    /// Create from API key
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let config = HttpConfig::default();

        Ok(Self {
            http: config.build_client()?,
            http_file: config.build_client()?,
            api_key: api_key.into(),
            base_url: SEMVAULT_API_URL.to_string(),
            transcriber: None,
        })
    }

    /// Create from environment variable
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SEMVAULT_API_KEY")
            .map_err(|_| Error::Config("SEMVAULT_API_KEY not set".to_string()))?;
        Self::new(api_key)
    }

    /// Override the service base URL (self-hosted deployments, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Enable audio storage through the Whisper API with this key
    pub fn with_transcription_key(self, api_key: impl Into<String>) -> Result<Self> {
        let whisper = WhisperClient::new(api_key)?;
        Ok(self.with_transcriber(Arc::new(whisper)))
    }

    /// Enable audio storage through any transcription backend
    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| Error::Internal(e.to_string()))?,
        );
        Ok(headers)
    }

    // The multipart body supplies its own content type and boundary
    fn build_file_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| Error::Internal(e.to_string()))?,
        );
        Ok(headers)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        tracing::debug!(path, "dispatching request");
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .headers(self.build_headers()?)
            .json(body)
            .send()
            .await?;

        Self::normalize(response).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiResponse> {
        tracing::debug!(path, "dispatching multipart request");
        let response = self
            .http_file
            .post(format!("{}{}", self.base_url, path))
            .headers(self.build_file_headers()?)
            .multipart(form)
            .send()
            .await?;

        Self::normalize(response).await
    }

    /// Decode the response body on both outcomes.
    ///
    /// The service answers failed requests with a structured JSON body, so a
    /// 4xx/5xx becomes [`ApiResponse::Failure`] rather than an error. A
    /// failure whose body does not decode as JSON propagates the decode
    /// error instead.
    pub(crate) async fn normalize(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let payload: Value = response.json().await?;

        if status.is_success() {
            Ok(ApiResponse::Success(payload))
        } else {
            tracing::warn!(%status, "request answered with failure payload");
            Ok(ApiResponse::Failure(payload))
        }
    }

    pub(crate) fn transcriber(&self) -> Result<&Arc<dyn Transcriber>> {
        self.transcriber.as_ref().ok_or_else(|| {
            Error::TranscriberUnavailable(
                "no transcription backend configured; set one with with_transcription_key"
                    .to_string(),
            )
        })
    }
}
