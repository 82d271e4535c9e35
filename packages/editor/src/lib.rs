//! # Pageforge Editor
//!
//! Core editing engine for the page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: persisted page + component records   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: store + mutations + sessions        │
//! │  - Copy-on-write component store            │
//! │  - Apply mutations with validation          │
//! │  - Guarded late-completion updates          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: records → VNode tree              │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Copy-on-write**: every store operation returns a new store value;
//!    a caller holding the previous value sees it unchanged.
//! 2. **Single writer**: one active session per page, all mutations applied
//!    on one logical thread. No locking, no merge machinery.
//! 3. **No silent data loss**: duplicate-id insertion is rejected, never
//!    overwritten. Unknown-id update/remove are contractual no-ops.
//! 4. **Stale completions are no-ops**: async results (uploads, suggestions)
//!    re-check existence by id before applying.

mod mutations;
mod session;
mod store;

pub use mutations::Mutation;
pub use session::EditSession;
pub use store::{ComponentStore, StoreError};
