use crate::bundle::{StyleBundle, Variant};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

pub type ThemeResult<T> = Result<T, ThemeError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    #[error("No style table for component kind '{0}'")]
    UnstyledKind(String),

    #[error("Kinds missing a mandatory free bundle: {}", kinds.join(", "))]
    MissingFreeBundle { kinds: Vec<String> },
}

/// Two-level style table: component kind -> variant -> bundle.
///
/// Themes are authored in code (or loaded from config) once and treated as
/// read-only afterwards. Coverage problems are surfaced by `validate`, which
/// the renderer registry runs at registration time.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    tables: HashMap<String, HashMap<Variant, StyleBundle>>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a bundle for a kind/variant pair, replacing any previous entry.
    pub fn insert(
        &mut self,
        kind: impl Into<String>,
        variant: Variant,
        bundle: StyleBundle,
    ) -> &mut Self {
        self.tables.entry(kind.into()).or_default().insert(variant, bundle);
        self
    }

    /// Resolve a bundle for `(kind, variant)`.
    ///
    /// A missing non-free variant falls back to the kind's `free` bundle.
    /// Returns `Err(UnstyledKind)` only when the kind has no table at all -
    /// with a validated theme that cannot happen for registered kinds.
    pub fn resolve(&self, kind: &str, variant: Variant) -> ThemeResult<&StyleBundle> {
        let table = self
            .tables
            .get(kind)
            .ok_or_else(|| ThemeError::UnstyledKind(kind.to_string()))?;

        if let Some(bundle) = table.get(&variant) {
            return Ok(bundle);
        }

        if variant != Variant::Free {
            debug!(kind, %variant, "variant missing, falling back to free bundle");
        }

        table
            .get(&Variant::Free)
            .ok_or_else(|| ThemeError::UnstyledKind(kind.to_string()))
    }

    pub fn has_free_bundle(&self, kind: &str) -> bool {
        self.tables
            .get(kind)
            .map(|table| table.contains_key(&Variant::Free))
            .unwrap_or(false)
    }

    /// Check that every one of `kinds` carries a `free` bundle.
    ///
    /// Run at registry construction so coverage gaps fail at authoring time
    /// rather than degrading renders in production.
    pub fn validate<'a>(&self, kinds: impl IntoIterator<Item = &'a str>) -> ThemeResult<()> {
        let mut missing: Vec<String> = kinds
            .into_iter()
            .filter(|kind| !self.has_free_bundle(kind))
            .map(|kind| kind.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            missing.sort();
            Err(ThemeError::MissingFreeBundle { kinds: missing })
        }
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }
}

/// The stock landing-page theme shipped with the builder.
///
/// Free bundles are the plain baseline; premium bundles layer gradients and
/// heavier shadows on top of the same structure.
pub fn builtin_theme() -> Theme {
    let mut theme = Theme::new();

    theme.insert(
        "TopBar",
        Variant::Free,
        StyleBundle::new("pf-topbar flex items-center justify-between px-6 py-4 bg-white border-b")
            .with_title("text-lg font-semibold text-gray-900")
            .with_button("px-4 py-2 rounded bg-gray-900 text-white text-sm"),
    );
    theme.insert(
        "TopBar",
        Variant::Premium,
        StyleBundle::new(
            "pf-topbar flex items-center justify-between px-8 py-5 bg-gradient-to-r from-indigo-600 to-purple-600",
        )
        .with_title("text-lg font-bold text-white")
        .with_button("px-5 py-2 rounded-full bg-white text-indigo-700 text-sm font-medium"),
    );

    theme.insert(
        "Hero",
        Variant::Free,
        StyleBundle::new("pf-hero text-center px-6 py-20 bg-gray-50")
            .with_title("text-4xl font-bold text-gray-900 mb-4")
            .with_content("text-lg text-gray-600 max-w-2xl mx-auto")
            .with_button("mt-8 px-6 py-3 rounded bg-indigo-600 text-white"),
    );
    theme.insert(
        "Hero",
        Variant::Premium,
        StyleBundle::new(
            "pf-hero text-center px-6 py-28 bg-gradient-to-b from-indigo-900 to-gray-900",
        )
        .with_title("text-5xl font-extrabold text-white mb-6")
        .with_content("text-xl text-indigo-100 max-w-3xl mx-auto")
        .with_button("mt-10 px-8 py-4 rounded-full bg-white text-indigo-900 font-semibold shadow-xl"),
    );

    theme.insert(
        "Text",
        Variant::Free,
        StyleBundle::new("pf-text px-6 py-8 max-w-3xl mx-auto")
            .with_content("text-base text-gray-700 leading-relaxed"),
    );

    theme.insert(
        "Image",
        Variant::Free,
        StyleBundle::new("pf-image px-6 py-8 flex justify-center")
            .with_content("max-w-full rounded"),
    );
    theme.insert(
        "Image",
        Variant::Premium,
        StyleBundle::new("pf-image px-6 py-10 flex justify-center")
            .with_content("max-w-full rounded-xl shadow-2xl"),
    );

    theme.insert(
        "Button",
        Variant::Free,
        StyleBundle::new("pf-button px-6 py-6 flex justify-center")
            .with_button("px-6 py-3 rounded bg-indigo-600 text-white"),
    );
    theme.insert(
        "Button",
        Variant::Premium,
        StyleBundle::new("pf-button px-6 py-8 flex justify-center")
            .with_button("px-8 py-4 rounded-full bg-gradient-to-r from-indigo-600 to-purple-600 text-white shadow-lg"),
    );

    theme.insert(
        "Grid",
        Variant::Free,
        StyleBundle::new("pf-grid px-6 py-12 grid gap-6 max-w-5xl mx-auto")
            .with_content("p-6 rounded border bg-white")
            .with_title("text-xl font-semibold text-gray-900 mb-2"),
    );
    theme.insert(
        "Grid",
        Variant::Premium,
        StyleBundle::new("pf-grid px-6 py-16 grid gap-8 max-w-6xl mx-auto")
            .with_content("p-8 rounded-xl shadow-lg bg-white")
            .with_title("text-xl font-bold text-gray-900 mb-3"),
    );

    theme.insert(
        "LeadForm",
        Variant::Free,
        StyleBundle::new("pf-leadform px-6 py-12 max-w-md mx-auto")
            .with_title("text-2xl font-semibold text-gray-900 mb-4")
            .with_content("w-full px-4 py-2 rounded border mb-3")
            .with_button("w-full px-4 py-3 rounded bg-indigo-600 text-white"),
    );

    theme.insert(
        "Footer",
        Variant::Free,
        StyleBundle::new("pf-footer px-6 py-10 bg-gray-900 text-center")
            .with_content("text-sm text-gray-400"),
    );

    debug_assert!(
        theme.validate(BUILTIN_KINDS.iter().copied()).is_ok(),
        "builtin theme must cover every builtin kind with a free bundle"
    );

    theme
}

/// Kinds the stock theme and registry agree on.
pub const BUILTIN_KINDS: &[&str] = &[
    "TopBar", "Hero", "Text", "Image", "Button", "Grid", "LeadForm", "Footer",
];
