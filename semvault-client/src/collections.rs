//! `/db/*` and `/collection/*` management operations

use serde::Serialize;

use semvault_core::error::Result;
use semvault_core::types::{ApiResponse, Project, Scope};

use crate::client::Semvault;

#[derive(Debug, Serialize)]
struct ScopeRequest {
    db: String,
    collection: String,
}

#[derive(Debug, Serialize)]
struct ProjectRequest {
    db: String,
}

// `/db/list` takes no fields at all
#[derive(Debug, Serialize)]
struct EmptyRequest {}

fn scope_body(data: Scope) -> ScopeRequest {
    ScopeRequest {
        db: data.db,
        collection: data.collection,
    }
}

fn project_body(data: Project) -> ProjectRequest {
    ProjectRequest { db: data.db }
}

impl Semvault {
    /// Fetch every vector stored in one collection
    pub async fn query_by_collection(&self, data: Scope) -> Result<ApiResponse> {
        self.post_json("/collection/vectors", &scope_body(data))
            .await
    }

    /// List the caller's projects
    pub async fn list_projects(&self) -> Result<ApiResponse> {
        self.post_json("/db/list", &EmptyRequest {}).await
    }

    /// Delete a project and everything in it
    pub async fn delete_project(&self, data: Project) -> Result<ApiResponse> {
        self.post_json("/db/delete", &project_body(data)).await
    }

    /// List the collections in one project
    pub async fn list_collections(&self, data: Project) -> Result<ApiResponse> {
        self.post_json("/collection/list", &project_body(data)).await
    }

    /// Delete one collection and its records
    pub async fn delete_collection(&self, data: Scope) -> Result<ApiResponse> {
        self.post_json("/collection/delete", &scope_body(data)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scope_payload_carries_db_and_collection_only() {
        let value = serde_json::to_value(scope_body(Scope::new("d1", "c1"))).unwrap();
        assert_eq!(value, json!({"db": "d1", "collection": "c1"}));
    }

    #[test]
    fn project_payload_carries_db_only() {
        let value = serde_json::to_value(project_body(Project::new("d1"))).unwrap();
        assert_eq!(value, json!({"db": "d1"}));
    }

    #[test]
    fn list_projects_payload_is_empty() {
        let value = serde_json::to_value(EmptyRequest {}).unwrap();
        assert_eq!(value, json!({}));
    }
}
