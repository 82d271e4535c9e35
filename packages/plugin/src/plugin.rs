use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PluginError {
    #[error("Plugin '{plugin}' failed to start: {message}")]
    Start { plugin: String, message: String },

    #[error("Plugin '{plugin}' failed to stop: {message}")]
    Stop { plugin: String, message: String },
}

/// Static identity of a plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub version: String,
    pub enabled: bool,
}

impl PluginDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            version: "0.1.0".to_string(),
            enabled: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Capability implemented by editor plugins: two lifecycle points, nothing
/// else. Composition over a flat list - there is no plugin hierarchy.
pub trait EditorPlugin: Send {
    fn descriptor(&self) -> &PluginDescriptor;

    /// Called at editor mount. Owns its listeners/timers until `stop`.
    fn start(&mut self) -> Result<(), PluginError>;

    /// Called at editor unmount. Must undo everything `start` set up.
    fn stop(&mut self) -> Result<(), PluginError>;
}
