//! `/smart/*` document-intelligence operations

use serde::Serialize;

use semvault_core::error::Result;
use semvault_core::types::{ApiResponse, OneLiner, Summarize};

use crate::client::Semvault;

#[derive(Debug, Serialize)]
struct SearchWebRequest {
    search: String,
}

#[derive(Debug, Serialize)]
struct ParseWebRequest {
    url: String,
}

#[derive(Debug, Serialize)]
struct SummaryRequest {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OneLinerRequest {
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    instruction: Option<String>,
}

fn summary_body(data: Summarize) -> SummaryRequest {
    SummaryRequest {
        content: data.content,
        count: data.count,
    }
}

fn one_liner_body(data: OneLiner) -> OneLinerRequest {
    OneLinerRequest {
        content: data.content,
        instruction: data.instruction,
    }
}

impl Semvault {
    /// Search the web and return ranked results
    pub async fn search_web(&self, search: impl Into<String>) -> Result<ApiResponse> {
        let body = SearchWebRequest {
            search: search.into(),
        };
        self.post_json("/smart/web", &body).await
    }

    /// Parse a webpage into structured extracted content
    pub async fn parse_web(&self, url: impl Into<String>) -> Result<ApiResponse> {
        let body = ParseWebRequest { url: url.into() };
        self.post_json("/smart/webpage", &body).await
    }

    /// Summarize text, optionally to a target character count
    pub async fn summarize(&self, data: Summarize) -> Result<ApiResponse> {
        self.post_json("/smart/summary", &summary_body(data)).await
    }

    /// Condense text into a single line
    pub async fn one_liner(&self, data: OneLiner) -> Result<ApiResponse> {
        self.post_json("/smart/oneliner", &one_liner_body(data))
            .await
    }
}
