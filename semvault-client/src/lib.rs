//! # Semvault Client
//!
//! Typed async client for the Semvault vector-store and
//! document-intelligence API.
//!
//! Every operation marshals its input into one HTTP request and hands the
//! decoded response body back unchanged; the remote service does all real
//! work (chunking, embedding, vector search, summarization). Remote
//! failures that carry a structured body come back as values, not errors;
//! see [`ApiResponse`].

#![warn(missing_docs)]

// Re-export core types for convenience
pub use semvault_core::error::{Error, Result};
pub use semvault_core::transcription::Transcriber;
pub use semvault_core::types::{
    ApiResponse, DeleteByIds, DeleteByUpload, FileUpload, Metadata, OneLiner, Project, Query,
    QueryVectors, Scope, StoreFile, StoreText, StoreWeb, Summarize,
};

pub mod client;
pub mod mock;
pub mod whisper;

mod collections;
mod data;
mod smart;

#[cfg(test)]
mod client_tests;

pub use client::Semvault;
pub use whisper::WhisperClient;

/// HTTP client configuration
#[derive(Clone)]
pub struct HttpConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connection pool idle timeout
    pub pool_idle_timeout_secs: u64,
    /// Max idle connections per host
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            pool_idle_timeout_secs: 90,
            pool_max_idle_per_host: 32,
        }
    }
}

impl HttpConfig {
    /// Build a reqwest client
    pub fn build_client(&self) -> Result<reqwest::Client> {
        use std::time::Duration;

        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .pool_idle_timeout(Duration::from_secs(self.pool_idle_timeout_secs))
            .pool_max_idle_per_host(self.pool_max_idle_per_host)
            .build()
            .map_err(|e| Error::Internal(e.to_string()))
    }
}
