//! # Pageforge Workspace
//!
//! Wraps the external collaborators the builder core depends on: the page
//! document store, the asset upload endpoint, and the content suggestion
//! service. The core only ever sees these through the traits defined here.
//!
//! ## Boundary Contracts
//!
//! - **Persistence**: get-by-id and put-whole-document, optimistic. No
//!   partial patches; concurrent writers resolve last-write-wins.
//! - **Uploads**: binary payload in, public URL string out. Renderers only
//!   ever consume the URL.
//! - **Suggestions**: a list of candidate content payloads per component;
//!   applying one routes through the session's guarded update path, so a
//!   suggestion arriving after the component was removed is dropped.
//!
//! Boundary failures are transient: surfaced to the caller, retried only by
//! re-invoking the user action. No automatic retry loop.

mod boundaries;
mod errors;
mod memory;
mod service;

pub use boundaries::{AssetUploader, PageRepository, Suggestion, SuggestionProvider};
pub use errors::WorkspaceError;
pub use memory::{CannedSuggestions, InMemoryPages, StaticUploader};
pub use service::PageService;
