use crate::errors::WorkspaceError;
use async_trait::async_trait;
use pageforge_model::PageDocument;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// External page document store.
///
/// Whole-document granularity only: get by id, put the full document.
/// Concurrent writers are out of scope; the last put wins.
#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn get(&self, page_id: &str) -> Result<Option<PageDocument>, WorkspaceError>;

    async fn put(&self, page: PageDocument) -> Result<(), WorkspaceError>;
}

/// External binary asset store. Accepts a payload, returns a public URL.
#[async_trait]
pub trait AssetUploader: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String, WorkspaceError>;
}

/// Candidate content payload for one component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub content: Map<String, Value>,
}

/// External content suggestion service (AI-backed in production).
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn suggest(
        &self,
        component_id: &str,
        hint: Option<&str>,
    ) -> Result<Vec<Suggestion>, WorkspaceError>;
}
