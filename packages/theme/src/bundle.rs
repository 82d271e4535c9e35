use serde::{Deserialize, Serialize};
use std::fmt;

/// Style tier a bundle is resolved for.
///
/// `Free` is the mandatory baseline; `Premium` is the paid tier and may be
/// absent for any given kind, in which case resolution falls back to `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Free,
    Premium,
}

impl Default for Variant {
    fn default() -> Self {
        Variant::Free
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Free => write!(f, "free"),
            Variant::Premium => write!(f, "premium"),
        }
    }
}

/// Resolved set of presentation class names for one component kind/variant.
///
/// Derived, never persisted. Renderers attach these verbatim to the nodes
/// they emit; empty strings mean the renderer skips the class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBundle {
    pub container: String,
    pub content: String,
    pub title: String,
    pub button: String,
}

impl StyleBundle {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, classes: impl Into<String>) -> Self {
        self.content = classes.into();
        self
    }

    pub fn with_title(mut self, classes: impl Into<String>) -> Self {
        self.title = classes.into();
        self
    }

    pub fn with_button(mut self, classes: impl Into<String>) -> Self {
        self.button = classes.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults_to_free() {
        assert_eq!(Variant::default(), Variant::Free);
    }

    #[test]
    fn test_bundle_builder() {
        let bundle = StyleBundle::new("pf-hero")
            .with_title("pf-hero-title")
            .with_button("pf-btn");

        assert_eq!(bundle.container, "pf-hero");
        assert_eq!(bundle.title, "pf-hero-title");
        assert_eq!(bundle.button, "pf-btn");
        assert!(bundle.content.is_empty());
    }
}
