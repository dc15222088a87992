//! Request and response shapes for the Semvault API
//!
//! These are pure data-transfer types: every field is supplied by the caller
//! per call, and nothing is cached between calls. Optional fields that are
//! `None` never reach the wire.

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Free-form metadata attached to stored content.
///
/// An open mapping with JSON-compatible values (string, number, boolean,
/// null, nested mapping or sequence).
pub type Metadata = serde_json::Map<String, Value>;

/// A database/collection pair addressing one partition of stored content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
}

impl Scope {
    /// Create a new scope
    pub fn new(db: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
        }
    }
}

/// A database reference used by project-level management calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Target database id
    pub db: String,
}

impl Project {
    /// Create a new project reference
    pub fn new(db: impl Into<String>) -> Self {
        Self { db: db.into() }
    }
}

/// Inline text to store and embed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreText {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// The text content to chunk and embed server-side
    pub content: String,
    /// Free-form metadata attached to every resulting record
    pub metadata: Option<Metadata>,
    /// Desired chunk size hint, in characters
    pub chunk_size: Option<u32>,
    /// Explicit record identifier; the service mints one when absent
    pub vector_id: Option<String>,
}

impl StoreText {
    /// Create a store-text request with no optional fields set
    pub fn new(
        db: impl Into<String>,
        collection: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            content: content.into(),
            metadata: None,
            chunk_size: None,
            vector_id: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the chunk size hint
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Set an explicit record identifier
    pub fn with_vector_id(mut self, vector_id: impl Into<String>) -> Self {
        self.vector_id = Some(vector_id.into());
        self
    }
}

/// A file to upload and store (PDF or audio, depending on the operation)
#[derive(Debug, Clone)]
pub struct StoreFile {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// The file contents
    pub file: FileUpload,
    /// Free-form metadata attached to every resulting record
    pub metadata: Option<Metadata>,
    /// Desired chunk size hint, in characters
    pub chunk_size: Option<u32>,
}

impl StoreFile {
    /// Create a store-file request with no optional fields set
    pub fn new(db: impl Into<String>, collection: impl Into<String>, file: FileUpload) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            file,
            metadata: None,
            chunk_size: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the chunk size hint
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }
}

/// A webpage to fetch, extract and store server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreWeb {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// The page URL
    pub url: String,
    /// Free-form metadata attached to every resulting record
    pub metadata: Option<Metadata>,
    /// Desired chunk size hint, in characters
    pub chunk_size: Option<u32>,
}

impl StoreWeb {
    /// Create a store-webpage request with no optional fields set
    pub fn new(
        db: impl Into<String>,
        collection: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            url: url.into(),
            metadata: None,
            chunk_size: None,
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the chunk size hint
    pub fn with_chunk_size(mut self, chunk_size: u32) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }
}

/// Delete specific records by identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteByIds {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// Record identifiers to delete; order is preserved on the wire
    pub vector_ids: Vec<String>,
}

impl DeleteByIds {
    /// Create a delete-by-ids request
    pub fn new(
        db: impl Into<String>,
        collection: impl Into<String>,
        vector_ids: Vec<String>,
    ) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            vector_ids,
        }
    }
}

/// Delete every record produced by one store call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteByUpload {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// The upload batch identifier returned by the store call
    pub upload_id: String,
}

impl DeleteByUpload {
    /// Create a delete-by-upload request
    pub fn new(
        db: impl Into<String>,
        collection: impl Into<String>,
        upload_id: impl Into<String>,
    ) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            upload_id: upload_id.into(),
        }
    }
}

/// Semantic search within one collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// Search text to embed and match against stored vectors
    pub search: String,
    /// Number of ranked matches to return
    pub count: u32,
    /// Optional metadata filter applied server-side
    pub metadata_filters: Option<Metadata>,
}

impl Query {
    /// Create a query with no metadata filter
    pub fn new(
        db: impl Into<String>,
        collection: impl Into<String>,
        search: impl Into<String>,
        count: u32,
    ) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            search: search.into(),
            count,
            metadata_filters: None,
        }
    }

    /// Restrict matches to records whose metadata satisfies the filter
    pub fn with_metadata_filters(mut self, filters: Metadata) -> Self {
        self.metadata_filters = Some(filters);
        self
    }
}

/// Bulk fetch of records by identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryVectors {
    /// Target database id
    pub db: String,
    /// Target collection id
    pub collection: String,
    /// Record identifiers to fetch
    pub vector_ids: Vec<String>,
}

impl QueryVectors {
    /// Create a query-by-ids request
    pub fn new(
        db: impl Into<String>,
        collection: impl Into<String>,
        vector_ids: Vec<String>,
    ) -> Self {
        Self {
            db: db.into(),
            collection: collection.into(),
            vector_ids,
        }
    }
}

/// Text to summarize server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summarize {
    /// The text to summarize
    pub content: String,
    /// Target summary length in characters
    pub count: Option<u32>,
}

impl Summarize {
    /// Create a summarize request with no length target
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            count: None,
        }
    }

    /// Set the target summary length
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

/// Text to condense into a single line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneLiner {
    /// The text to condense
    pub content: String,
    /// Optional instruction steering the condensation
    pub instruction: Option<String>,
}

impl OneLiner {
    /// Create a one-liner request with no instruction
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            instruction: None,
        }
    }

    /// Set the steering instruction
    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }
}

/// An in-memory file destined for a multipart upload
#[derive(Debug, Clone)]
pub struct FileUpload {
    file_name: String,
    bytes: Bytes,
}

impl FileUpload {
    /// Create an upload from raw bytes
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read an upload from disk, taking the file name from the path
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self {
            file_name,
            bytes: bytes.into(),
        })
    }

    /// The file name sent with the multipart part
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Size of the file in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the file has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrow the file contents
    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    /// Take ownership of the file contents
    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }
}

/// Outcome of one remote operation.
///
/// The service answers failures with a structured body just like successes,
/// so both arrive through `Ok` at the call site; only transport faults with
/// no decodable body, validation rejections and transcription faults surface
/// as errors. Match on the variant to tell the outcomes apart.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Decoded body of a 2xx response
    Success(Value),
    /// Decoded body carried by a 4xx/5xx response
    Failure(Value),
}

impl ApiResponse {
    /// True for a success-shaped payload
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True for a failure-shaped payload
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the payload regardless of outcome
    pub fn payload(&self) -> &Value {
        match self {
            Self::Success(v) | Self::Failure(v) => v,
        }
    }

    /// Take the payload regardless of outcome
    pub fn into_payload(self) -> Value {
        match self {
            Self::Success(v) | Self::Failure(v) => v,
        }
    }
}
