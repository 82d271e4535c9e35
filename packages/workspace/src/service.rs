use crate::boundaries::{AssetUploader, PageRepository, SuggestionProvider};
use crate::errors::WorkspaceError;
use pageforge_editor::EditSession;
use tracing::{debug, info};

/// Coordinates editing sessions with the external boundaries.
///
/// Owns no global state: callers construct one service per configured
/// backend set and pass sessions in explicitly. Network completions flow
/// back into the session through its guarded update path, so slow responses
/// that outlive their component become no-ops rather than resurrections.
pub struct PageService<R, U, S> {
    repository: R,
    uploader: U,
    suggestions: S,
}

impl<R, U, S> PageService<R, U, S>
where
    R: PageRepository,
    U: AssetUploader,
    S: SuggestionProvider,
{
    pub fn new(repository: R, uploader: U, suggestions: S) -> Self {
        Self {
            repository,
            uploader,
            suggestions,
        }
    }

    /// Fetch a page and open an editing session over it.
    pub async fn open(&self, page_id: &str) -> Result<EditSession, WorkspaceError> {
        let page = self
            .repository
            .get(page_id)
            .await?
            .ok_or_else(|| WorkspaceError::PageNotFound(page_id.to_string()))?;

        info!(page_id, components = page.components.len(), "opened page session");
        Ok(EditSession::open(&page)?)
    }

    /// Persist the session's current state, whole-document, last-write-wins.
    pub async fn save(&self, session: &EditSession) -> Result<(), WorkspaceError> {
        let mut page = self
            .repository
            .get(&session.page_id)
            .await?
            .ok_or_else(|| WorkspaceError::PageNotFound(session.page_id.clone()))?;

        session.write_back(&mut page);
        info!(page_id = %session.page_id, version = session.version(), "saving page");
        self.repository.put(page).await
    }

    /// Upload an image payload and attach the resulting URL to a component.
    ///
    /// Returns `Ok(false)` when the component was removed while the upload
    /// was in flight - the completion is dropped, per the stale-completion
    /// rule.
    pub async fn attach_upload(
        &self,
        session: &mut EditSession,
        component_id: &str,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<bool, WorkspaceError> {
        let url = self.uploader.upload(bytes, filename).await?;
        debug!(component_id, url = %url, "upload complete");

        Ok(session.set_content_if_present(component_id, "src", url.into()))
    }

    /// List content suggestions for a component.
    pub async fn suggest(
        &self,
        component_id: &str,
        hint: Option<&str>,
    ) -> Result<Vec<crate::boundaries::Suggestion>, WorkspaceError> {
        self.suggestions.suggest(component_id, hint).await
    }

    /// Apply one suggestion by id through the session's guarded update path.
    ///
    /// Unknown suggestion ids are an error; a component removed since the
    /// suggestion was fetched makes this a no-op (`Ok(false)`).
    pub async fn apply_suggestion(
        &self,
        session: &mut EditSession,
        component_id: &str,
        hint: Option<&str>,
        suggestion_id: &str,
    ) -> Result<bool, WorkspaceError> {
        let suggestions = self.suggestions.suggest(component_id, hint).await?;

        let suggestion = suggestions
            .into_iter()
            .find(|s| s.id == suggestion_id)
            .ok_or_else(|| WorkspaceError::SuggestionNotFound {
                component_id: component_id.to_string(),
                suggestion_id: suggestion_id.to_string(),
            })?;

        debug!(component_id, suggestion_id, "applying suggestion");
        Ok(session.apply_if_present(component_id, suggestion.content))
    }
}
