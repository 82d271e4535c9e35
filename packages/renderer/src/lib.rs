//! # Pageforge Renderer
//!
//! Renders persisted component records to a virtual node tree.
//!
//! ## Pipeline
//!
//! ```text
//! PageDocument -> [registry lookup per record] -> VNode tree -> HTML
//! ```
//!
//! ## Soft-Failure Contract
//!
//! **INVARIANT: rendering a record never panics and never fails the page.**
//!
//! - An empty type tag logs and renders nothing.
//! - An unregistered type tag logs one warning naming the tag and renders
//!   nothing; the remaining records still render.
//! - Style resolution problems degrade the same way.
//!
//! The worst case for any record is a missing visual element, never a
//! crashed editing session. Configuration problems (a registered kind with
//! no free style bundle) are rejected earlier, at registration time.
//!
//! ## Determinism
//!
//! Rendering is pure: the same records, registry, and variant produce an
//! identical tree. Attributes are kept in sorted order so serialized output
//! is stable across runs.

pub mod builtins;
pub mod registry;
pub mod renderer;
pub mod vdom;

pub use registry::{Registry, RegistryError, Renderable};
pub use renderer::RenderedPage;
pub use vdom::VNode;
