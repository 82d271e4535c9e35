//! # Pageforge Plugin Host
//!
//! Owns the lifecycle of editor plugins: `start` on editor mount, `stop` on
//! editor unmount, both in registration order.
//!
//! ## Error Isolation
//!
//! A plugin's `start` failure never prevents the remaining plugins from
//! starting. Failures are collected per plugin and returned for reporting;
//! the batch always runs to completion. `stop_all` behaves the same way.
//!
//! ## Plugin Author Contract
//!
//! `stop` must undo everything `start` set up (listeners, timers, ambient
//! state). The host cannot verify this - it is a documented requirement on
//! plugin authors. Between `start` and `stop` a plugin owns whatever it
//! created; the host makes no other assumption about what a plugin does.

mod host;
mod plugin;

pub use host::{PluginFailure, PluginHost};
pub use plugin::{EditorPlugin, PluginDescriptor, PluginError};
