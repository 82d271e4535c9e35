use crate::builtins;
use crate::vdom::VNode;
use pageforge_model::ComponentRecord;
use pageforge_theme::{builtin_theme, StyleBundle, Theme, ThemeError, Variant};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Renderer for '{0}' is already registered")]
    DuplicateKind(String),

    #[error(transparent)]
    Theme(#[from] ThemeError),
}

/// Capability implemented by every registered component renderer.
///
/// A renderer receives the record (for its content payload) and the style
/// bundle already resolved for the requested variant. It must be pure:
/// no store access, no I/O, output fully determined by its inputs.
pub trait Renderable: Send + Sync {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode;
}

impl<F> Renderable for F
where
    F: Fn(&ComponentRecord, &StyleBundle) -> VNode + Send + Sync,
{
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        self(record, styles)
    }
}

/// Type-tag -> renderer dispatch table, paired with the theme that styles it.
///
/// Populated once at construction and read-only afterwards. Registration
/// validates that the theme carries a `free` bundle for the kind, so an
/// unstyled kind is rejected here instead of degrading renders later.
pub struct Registry {
    renderers: HashMap<String, Box<dyn Renderable>>,
    theme: Theme,
}

impl Registry {
    /// Empty registry over an explicitly provided theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            renderers: HashMap::new(),
            theme,
        }
    }

    /// Registry preloaded with the stock landing-page component set.
    pub fn builtin() -> Self {
        let mut registry = Self::new(builtin_theme());
        builtins::register_all(&mut registry)
            .unwrap_or_else(|e| panic!("builtin registry must be internally consistent: {e}"));
        registry
    }

    pub fn register(
        &mut self,
        kind: impl Into<String>,
        renderer: Box<dyn Renderable>,
    ) -> Result<(), RegistryError> {
        let kind = kind.into();

        if self.renderers.contains_key(&kind) {
            return Err(RegistryError::DuplicateKind(kind));
        }
        self.theme.validate([kind.as_str()])?;

        debug!(kind = %kind, "registered component renderer");
        self.renderers.insert(kind, renderer);
        Ok(())
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.renderers.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.renderers.keys().map(String::as_str)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render one record, wrapped in the uniform positioning container.
    ///
    /// Soft-fails to `None` (with a logged warning) on an empty or
    /// unregistered type tag; the caller keeps rendering its remaining
    /// records. Never panics, never mutates the record.
    pub fn render(&self, record: &ComponentRecord, variant: Variant) -> Option<VNode> {
        if record.kind.is_empty() {
            warn!(id = %record.id, "record has no type tag, skipping");
            return None;
        }

        let Some(renderer) = self.renderers.get(&record.kind) else {
            warn!(kind = %record.kind, id = %record.id, "no renderer registered for kind, skipping");
            return None;
        };

        let styles = match self.theme.resolve(&record.kind, variant) {
            Ok(styles) => styles,
            Err(e) => {
                warn!(kind = %record.kind, id = %record.id, error = %e, "style resolution failed, skipping");
                return None;
            }
        };

        let inner = renderer.render(record, styles);

        // Uniform positioning container: siblings lay out predictably no
        // matter what the inner renderer emitted.
        Some(
            VNode::element("div")
                .with_class("pf-slot")
                .with_attr("data-component-id", record.id.clone())
                .with_child(inner),
        )
    }
}
