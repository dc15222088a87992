//! `/data/*` operations: storing, deleting and querying content

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;

use semvault_core::error::{Error, Result};
use semvault_core::types::{
    ApiResponse, DeleteByIds, DeleteByUpload, Metadata, Query, QueryVectors, StoreFile, StoreText,
    StoreWeb,
};

use crate::client::Semvault;

/// Largest file the store-PDF path accepts, in bytes
pub const MAX_FILE_BYTES: usize = 20_000_000;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreRequest {
    db: String,
    collection: String,
    content: String,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    vector_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chunk_size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreMultipleRequest {
    db: String,
    collection: String,
    data: Value,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    chunk_size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreWebRequest {
    db: String,
    collection: String,
    url: String,
    metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    chunk_size: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteRequest {
    db: String,
    collection: String,
    vector_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteUploadRequest {
    db: String,
    collection: String,
    upload_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest {
    db: String,
    collection: String,
    search: String,
    count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata_filters: Option<Metadata>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryVectorsRequest {
    db: String,
    collection: String,
    vector_ids: Vec<String>,
}

fn store_body(data: StoreText) -> StoreRequest {
    StoreRequest {
        db: data.db,
        collection: data.collection,
        content: data.content,
        metadata: data.metadata.unwrap_or_default(),
        vector_id: data.vector_id,
        chunk_size: data.chunk_size,
    }
}

fn store_web_body(data: StoreWeb) -> StoreWebRequest {
    StoreWebRequest {
        db: data.db,
        collection: data.collection,
        url: data.url,
        metadata: data.metadata.unwrap_or_default(),
        chunk_size: data.chunk_size,
    }
}

fn delete_body(data: DeleteByIds) -> DeleteRequest {
    DeleteRequest {
        db: data.db,
        collection: data.collection,
        vector_ids: data.vector_ids,
    }
}

fn delete_upload_body(data: DeleteByUpload) -> DeleteUploadRequest {
    DeleteUploadRequest {
        db: data.db,
        collection: data.collection,
        upload_id: data.upload_id,
    }
}

fn query_body(data: Query) -> QueryRequest {
    QueryRequest {
        db: data.db,
        collection: data.collection,
        search: data.search,
        count: data.count,
        metadata_filters: data.metadata_filters,
    }
}

fn query_vectors_body(data: QueryVectors) -> QueryVectorsRequest {
    QueryVectorsRequest {
        db: data.db,
        collection: data.collection,
        vector_ids: data.vector_ids,
    }
}

// The multipart form posted to the parsing endpoint. Scalar fields travel as
// text parts; metadata is JSON-encoded into one.
fn pdf_form(data: &StoreFile) -> Result<Form> {
    let part = Part::bytes(data.file.bytes().to_vec())
        .file_name(data.file.file_name().to_string())
        .mime_str("application/pdf")?;

    let mut form = Form::new()
        .part("file", part)
        .text("db", data.db.clone())
        .text("collection", data.collection.clone())
        .text("type", "pdf");
    if let Some(metadata) = &data.metadata {
        form = form.text("metadata", serde_json::to_string(metadata)?);
    }
    if let Some(chunk_size) = data.chunk_size {
        form = form.text("chunksize", chunk_size.to_string());
    }
    Ok(form)
}

// An audio store is a text store of the transcript; the rest of the input
// carries over unchanged.
fn text_from_audio(data: StoreFile, transcript: String) -> StoreText {
    StoreText {
        db: data.db,
        collection: data.collection,
        content: transcript,
        metadata: data.metadata,
        chunk_size: data.chunk_size,
        vector_id: None,
    }
}

impl Semvault {
    /// Store inline text; the service chunks and embeds it
    pub async fn store(&self, data: StoreText) -> Result<ApiResponse> {
        self.post_json("/data/store", &store_body(data)).await
    }

    /// Store a PDF document.
    ///
    /// Uploads the file to the parsing endpoint first, then stores the
    /// extracted structured data. A parse failure is returned as-is and the
    /// store step never runs. Files of 20 MB or more are rejected before
    /// any request is made.
    pub async fn store_pdf(&self, data: StoreFile) -> Result<ApiResponse> {
        if data.file.len() >= MAX_FILE_BYTES {
            return Err(Error::validation("File limit is 20MB"));
        }

        let parsed = self.post_multipart("/smart/pdf", pdf_form(&data)?).await?;
        let extraction = match parsed {
            ApiResponse::Success(extraction) => extraction,
            failure => return Ok(failure),
        };

        let body = StoreMultipleRequest {
            db: data.db,
            collection: data.collection,
            data: extraction,
            metadata: data.metadata.unwrap_or_default(),
            chunk_size: data.chunk_size,
        };
        self.post_json("/data/store/multiple", &body).await
    }

    /// Store a webpage; the service fetches and extracts it
    pub async fn store_web(&self, data: StoreWeb) -> Result<ApiResponse> {
        self.post_json("/data/store/webpage", &store_web_body(data))
            .await
    }

    /// Store an audio file by transcribing it and storing the transcript.
    ///
    /// Requires a transcription backend; see
    /// [`with_transcription_key`](Semvault::with_transcription_key).
    pub async fn store_audio(&self, data: StoreFile) -> Result<ApiResponse> {
        let transcriber = self.transcriber()?;
        let transcript = transcriber.transcribe(&data.file).await?;
        self.store(text_from_audio(data, transcript)).await
    }

    /// Delete specific records by identifier
    pub async fn delete_by_ids(&self, data: DeleteByIds) -> Result<ApiResponse> {
        self.post_json("/data/delete", &delete_body(data)).await
    }

    /// Delete every record produced by one store call
    pub async fn delete_by_upload(&self, data: DeleteByUpload) -> Result<ApiResponse> {
        self.post_json("/data/deleteupload", &delete_upload_body(data))
            .await
    }

    /// Semantic search within one collection
    pub async fn query(&self, data: Query) -> Result<ApiResponse> {
        self.post_json("/data/query", &query_body(data)).await
    }

    /// Bulk fetch of records by identifier
    pub async fn query_by_ids(&self, data: QueryVectors) -> Result<ApiResponse> {
        self.post_json("/data/vectors", &query_vectors_body(data))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semvault_core::types::FileUpload;
    use serde_json::json;

    fn metadata(pairs: &[(&str, &str)]) -> Metadata {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect()
    }

    #[test]
    fn store_payload_carries_exactly_the_declared_fields() {
        let req = StoreText::new("d1", "c1", "some text")
            .with_metadata(metadata(&[("source", "test")]))
            .with_chunk_size(256)
            .with_vector_id("v-7");

        let value = serde_json::to_value(store_body(req)).unwrap();
        assert_eq!(
            value,
            json!({
                "db": "d1",
                "collection": "c1",
                "content": "some text",
                "metadata": {"source": "test"},
                "vectorId": "v-7",
                "chunkSize": 256,
            })
        );
    }

    #[test]
    fn store_payload_defaults_metadata_and_drops_absent_options() {
        let value = serde_json::to_value(store_body(StoreText::new("d1", "c1", "text"))).unwrap();
        assert_eq!(
            value,
            json!({
                "db": "d1",
                "collection": "c1",
                "content": "text",
                "metadata": {},
            })
        );
    }

    #[test]
    fn delete_payload_preserves_identifier_order() {
        let ids = vec!["z".to_string(), "a".to_string(), "m".to_string()];
        let value = serde_json::to_value(delete_body(DeleteByIds::new("d1", "c1", ids))).unwrap();
        assert_eq!(value["vectorIds"], json!(["z", "a", "m"]));
    }

    #[test]
    fn query_payload_omits_absent_filter() {
        let value = serde_json::to_value(query_body(Query::new("d1", "c1", "find me", 5))).unwrap();
        assert_eq!(
            value,
            json!({
                "db": "d1",
                "collection": "c1",
                "search": "find me",
                "count": 5,
            })
        );
    }

    #[test]
    fn query_payload_carries_filter_when_set() {
        let req = Query::new("d1", "c1", "find me", 5)
            .with_metadata_filters(metadata(&[("lang", "en")]));
        let value = serde_json::to_value(query_body(req)).unwrap();
        assert_eq!(value["metadataFilters"], json!({"lang": "en"}));
    }

    #[test]
    fn query_vectors_payload_shape() {
        let req = QueryVectors::new("d1", "c1", vec!["v1".into(), "v2".into()]);
        let value = serde_json::to_value(query_vectors_body(req)).unwrap();
        assert_eq!(
            value,
            json!({"db": "d1", "collection": "c1", "vectorIds": ["v1", "v2"]})
        );
    }

    #[test]
    fn delete_upload_payload_shape() {
        let req = DeleteByUpload::new("d1", "c1", "batch-3");
        let value = serde_json::to_value(delete_upload_body(req)).unwrap();
        assert_eq!(
            value,
            json!({"db": "d1", "collection": "c1", "uploadId": "batch-3"})
        );
    }

    #[tokio::test]
    async fn oversized_pdf_is_rejected_before_any_request() {
        // Unroutable base URL: a dispatched request would fail with an HTTP
        // error, not a validation one.
        let client = Semvault::new("test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:1");

        let file = FileUpload::new("big.pdf", vec![0u8; MAX_FILE_BYTES]);
        let res = client.store_pdf(StoreFile::new("d1", "c1", file)).await;
        assert!(matches!(res, Err(Error::Validation(_))));
    }

    #[test]
    fn pdf_under_the_limit_builds_a_form() {
        let file = FileUpload::new("small.pdf", vec![0u8; 1024]);
        let data = StoreFile::new("d1", "c1", file)
            .with_metadata(metadata(&[("source", "test")]))
            .with_chunk_size(128);
        assert!(pdf_form(&data).is_ok());
    }

    #[test]
    fn audio_transcript_becomes_text_store_input() {
        let file = FileUpload::new("note.wav", vec![0u8; 16]);
        let data = StoreFile::new("d1", "c1", file)
            .with_metadata(metadata(&[("speaker", "me")]))
            .with_chunk_size(64);

        let text = text_from_audio(data, "hello world".to_string());
        assert_eq!(text.db, "d1");
        assert_eq!(text.collection, "c1");
        assert_eq!(text.content, "hello world");
        assert_eq!(text.chunk_size, Some(64));
        assert_eq!(text.metadata, Some(metadata(&[("speaker", "me")])));
        assert_eq!(text.vector_id, None);
    }

    #[tokio::test]
    async fn store_audio_without_backend_fails_fast() {
        let client = Semvault::new("test-key")
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let file = FileUpload::new("note.wav", vec![0u8; 16]);

        let res = client.store_audio(StoreFile::new("d1", "c1", file)).await;
        assert!(matches!(res, Err(Error::TranscriberUnavailable(_))));
    }
}
