//! # Semvault Core
//!
//! Core types, errors and traits for the Semvault SDK.
//!
//! This crate provides:
//! - Error types (`error`) - One error enum for the whole SDK
//! - Request shapes (`types`) - Data-transfer types for every operation
//! - Transcription (`transcription`) - The speech-to-text backend seam
//! - Rate limiting (`limiter`) - The shared transcription slot limiter
//! - Logging (`logging`) - Tracing setup with file rotation

#![warn(missing_docs)]

pub mod error;
pub mod limiter;
pub mod logging;
pub mod transcription;
pub mod types;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::limiter::{SlotLimiter, SlotPermit};
    pub use crate::transcription::Transcriber;
    pub use crate::types::{
        ApiResponse, DeleteByIds, DeleteByUpload, FileUpload, Metadata, OneLiner, Project, Query,
        QueryVectors, Scope, StoreFile, StoreText, StoreWeb, Summarize,
    };
}
