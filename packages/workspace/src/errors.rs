use pageforge_editor::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Suggestion '{suggestion_id}' not found for component '{component_id}'")]
    SuggestionNotFound {
        component_id: String,
        suggestion_id: String,
    },

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Suggestion service error: {0}")]
    Suggestions(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
