//! In-memory boundary implementations for local use and tests.

use crate::boundaries::{AssetUploader, PageRepository, Suggestion, SuggestionProvider};
use crate::errors::WorkspaceError;
use async_trait::async_trait;
use pageforge_model::PageDocument;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Page repository backed by a process-local map.
#[derive(Default)]
pub struct InMemoryPages {
    pages: RwLock<HashMap<String, PageDocument>>,
}

impl InMemoryPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_page(self, page: PageDocument) -> Self {
        self.pages.write().await.insert(page.id.clone(), page);
        self
    }

    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }
}

#[async_trait]
impl PageRepository for InMemoryPages {
    async fn get(&self, page_id: &str) -> Result<Option<PageDocument>, WorkspaceError> {
        Ok(self.pages.read().await.get(page_id).cloned())
    }

    async fn put(&self, page: PageDocument) -> Result<(), WorkspaceError> {
        self.pages.write().await.insert(page.id.clone(), page);
        Ok(())
    }
}

/// Uploader that mints deterministic URLs under a fixed base. Payload bytes
/// are dropped - the core only ever consumes the returned URL.
pub struct StaticUploader {
    base_url: String,
}

impl StaticUploader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl AssetUploader for StaticUploader {
    async fn upload(&self, bytes: Vec<u8>, filename: &str) -> Result<String, WorkspaceError> {
        if bytes.is_empty() {
            return Err(WorkspaceError::Upload("empty payload".to_string()));
        }
        Ok(format!("{}/{}", self.base_url.trim_end_matches('/'), filename))
    }
}

/// Suggestion provider serving a pre-authored table keyed by component id.
#[derive(Default)]
pub struct CannedSuggestions {
    by_component: HashMap<String, Vec<Suggestion>>,
}

impl CannedSuggestions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestions(mut self, component_id: impl Into<String>, suggestions: Vec<Suggestion>) -> Self {
        self.by_component.insert(component_id.into(), suggestions);
        self
    }
}

#[async_trait]
impl SuggestionProvider for CannedSuggestions {
    async fn suggest(
        &self,
        component_id: &str,
        _hint: Option<&str>,
    ) -> Result<Vec<Suggestion>, WorkspaceError> {
        Ok(self
            .by_component
            .get(component_id)
            .cloned()
            .unwrap_or_default())
    }
}
