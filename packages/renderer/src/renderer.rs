use crate::registry::Registry;
use crate::vdom::VNode;
use pageforge_model::{ComponentRecord, PageDocument};
use pageforge_theme::Variant;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fully rendered page: one root node per surviving record, in record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    pub name: String,
    pub nodes: Vec<VNode>,
}

impl RenderedPage {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Registry {
    /// Render an ordered record sequence.
    ///
    /// Record order is preserved; records that soft-fail are skipped without
    /// affecting the rest.
    pub fn render_records(&self, records: &[ComponentRecord], variant: Variant) -> Vec<VNode> {
        let nodes: Vec<VNode> = records
            .iter()
            .filter_map(|record| self.render(record, variant))
            .collect();

        debug!(
            rendered = nodes.len(),
            skipped = records.len() - nodes.len(),
            "rendered record sequence"
        );

        nodes
    }

    /// Render a whole page document.
    pub fn render_document(&self, page: &PageDocument, variant: Variant) -> RenderedPage {
        RenderedPage {
            name: page.name.clone(),
            nodes: self.render_records(&page.components, variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_matches_record_order() {
        let registry = Registry::builtin();
        let records = vec![
            ComponentRecord::new("a", "TopBar"),
            ComponentRecord::new("b", "Grid").with_content("columns", 3),
        ];

        let nodes = registry.render_records(&records, Variant::Free);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].attr("data-component-id"), Some("a"));
        assert_eq!(nodes[1].attr("data-component-id"), Some("b"));
    }

    #[test]
    fn test_unknown_kind_does_not_fail_the_page() {
        let registry = Registry::builtin();
        let records = vec![
            ComponentRecord::new("a", "Hero"),
            ComponentRecord::new("b", "NotARealKind"),
            ComponentRecord::new("c", "Footer"),
        ];

        let nodes = registry.render_records(&records, Variant::Free);
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].attr("data-component-id"), Some("a"));
        assert_eq!(nodes[1].attr("data-component-id"), Some("c"));
    }

    #[test]
    fn test_render_document_carries_page_name() {
        let registry = Registry::builtin();
        let page = PageDocument::new("p1", "Launch", "u1")
            .with_component(ComponentRecord::new("a", "Hero").with_content("title", "Go"));

        let rendered = registry.render_document(&page, Variant::Premium);
        assert_eq!(rendered.name, "Launch");
        assert_eq!(rendered.nodes.len(), 1);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let registry = Registry::builtin();
        let records = vec![
            ComponentRecord::new("a", "Hero").with_content("title", "Go"),
            ComponentRecord::new("b", "Grid").with_content("columns", 2),
        ];

        let first = registry.render_records(&records, Variant::Free);
        let second = registry.render_records(&records, Variant::Free);
        assert_eq!(first, second);
    }
}
