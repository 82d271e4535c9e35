//! # Pageforge Theme
//!
//! Resolves a component kind plus a style variant to a concrete bundle of
//! presentation class names.
//!
//! ## Determinism Contract
//!
//! Resolution is a pure two-level table lookup. For any theme value,
//! `resolve(kind, variant)` returns the identical bundle reference on every
//! call - no per-call randomness, no time or environment dependence.
//!
//! ## Fallback Rule
//!
//! Every styled kind MUST carry a `free` bundle. A missing non-free variant
//! falls back to that kind's `free` bundle; a kind with no `free` bundle is
//! a configuration error reported by `Theme::validate`, not a render-time
//! condition.

pub mod bundle;
pub mod theme;

pub use bundle::*;
pub use theme::*;
