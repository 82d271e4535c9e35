use crate::plugin::{EditorPlugin, PluginError};
use tracing::{debug, warn};

/// A recorded lifecycle failure, reported back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginFailure {
    pub plugin_id: String,
    pub error: PluginError,
}

/// Owner of plugin lifecycle invocation order.
///
/// Plugins run in registration order for both `start_all` and `stop_all`.
/// Disabled plugins are held but never invoked.
#[derive(Default)]
pub struct PluginHost {
    plugins: Vec<Box<dyn EditorPlugin>>,
}

impl PluginHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Box<dyn EditorPlugin>) {
        debug!(id = %plugin.descriptor().id, "registered plugin");
        self.plugins.push(plugin);
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Start every enabled plugin in registration order.
    ///
    /// One plugin failing does not stop the batch; failures are collected
    /// and returned after every plugin has been given its chance.
    pub fn start_all(&mut self) -> Vec<PluginFailure> {
        let mut failures = Vec::new();

        for plugin in &mut self.plugins {
            let descriptor = plugin.descriptor().clone();
            if !descriptor.enabled {
                debug!(id = %descriptor.id, "plugin disabled, skipping start");
                continue;
            }

            debug!(id = %descriptor.id, "starting plugin");
            if let Err(error) = plugin.start() {
                warn!(id = %descriptor.id, %error, "plugin failed to start");
                failures.push(PluginFailure {
                    plugin_id: descriptor.id,
                    error,
                });
            }
        }

        failures
    }

    /// Stop every enabled plugin, in the same (registration) order.
    pub fn stop_all(&mut self) -> Vec<PluginFailure> {
        let mut failures = Vec::new();

        for plugin in &mut self.plugins {
            let descriptor = plugin.descriptor().clone();
            if !descriptor.enabled {
                continue;
            }

            debug!(id = %descriptor.id, "stopping plugin");
            if let Err(error) = plugin.stop() {
                warn!(id = %descriptor.id, %error, "plugin failed to stop");
                failures.push(PluginFailure {
                    plugin_id: descriptor.id,
                    error,
                });
            }
        }

        failures
    }
}
