//! Stock landing-page component set.
//!
//! Every renderer here reads only plain content values and tolerates
//! missing or mistyped keys by falling back to defaults. Image-like
//! components consume public URL strings, never raw bytes.

use crate::registry::{Registry, RegistryError, Renderable};
use crate::vdom::VNode;
use pageforge_model::ComponentRecord;
use pageforge_theme::StyleBundle;
use serde_json::Value;

/// Register the full builtin set on `registry`, in canonical order.
pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    registry.register("TopBar", Box::new(TopBar))?;
    registry.register("Hero", Box::new(Hero))?;
    registry.register("Text", Box::new(Text))?;
    registry.register("Image", Box::new(Image))?;
    registry.register("Button", Box::new(Button))?;
    registry.register("Grid", Box::new(Grid))?;
    registry.register("LeadForm", Box::new(LeadForm))?;
    registry.register("Footer", Box::new(Footer))?;
    Ok(())
}

/// Navigation bar with a brand title and an optional call-to-action.
pub struct TopBar;

impl Renderable for TopBar {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        let mut node = VNode::element("header")
            .with_class(&styles.container)
            .with_child(
                VNode::element("span")
                    .with_class(&styles.title)
                    .with_child(VNode::text(record.str_field("title").unwrap_or("Untitled"))),
            );

        if let Some(cta) = record.str_field("cta") {
            node = node.with_child(
                VNode::element("a")
                    .with_class(&styles.button)
                    .with_attr("href", record.str_field("ctaHref").unwrap_or("#"))
                    .with_child(VNode::text(cta)),
            );
        }

        node
    }
}

/// Above-the-fold headline block.
pub struct Hero;

impl Renderable for Hero {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        let mut node = VNode::element("section")
            .with_class(&styles.container)
            .with_child(
                VNode::element("h1")
                    .with_class(&styles.title)
                    .with_child(VNode::text(record.str_field("title").unwrap_or("Headline"))),
            );

        if let Some(subtitle) = record.str_field("subtitle") {
            node = node.with_child(
                VNode::element("p")
                    .with_class(&styles.content)
                    .with_child(VNode::text(subtitle)),
            );
        }

        if let Some(cta) = record.str_field("cta") {
            node = node.with_child(
                VNode::element("a")
                    .with_class(&styles.button)
                    .with_attr("href", record.str_field("ctaHref").unwrap_or("#"))
                    .with_child(VNode::text(cta)),
            );
        }

        node
    }
}

/// Plain paragraph block.
pub struct Text;

impl Renderable for Text {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        VNode::element("div").with_class(&styles.container).with_child(
            VNode::element("p")
                .with_class(&styles.content)
                .with_child(VNode::text(record.str_field("text").unwrap_or(""))),
        )
    }
}

/// Single image referenced by public URL.
pub struct Image;

impl Renderable for Image {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        let src = record
            .str_field("src")
            .or_else(|| record.str_field("url"))
            .unwrap_or("");

        VNode::element("figure")
            .with_class(&styles.container)
            .with_child(
                VNode::element("img")
                    .with_class(&styles.content)
                    .with_attr("src", src)
                    .with_attr("alt", record.str_field("alt").unwrap_or("")),
            )
    }
}

/// Standalone call-to-action link.
pub struct Button;

impl Renderable for Button {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        VNode::element("div").with_class(&styles.container).with_child(
            VNode::element("a")
                .with_class(&styles.button)
                .with_attr("href", record.str_field("href").unwrap_or("#"))
                .with_child(VNode::text(record.str_field("label").unwrap_or("Learn more"))),
        )
    }
}

/// Card grid. `columns` is clamped to 1..=6; cells come from the `items`
/// array, each an object with optional `title` and `body`.
pub struct Grid;

impl Grid {
    const MAX_COLUMNS: u64 = 6;
}

impl Renderable for Grid {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        let columns = record.u64_field("columns").unwrap_or(3).clamp(1, Self::MAX_COLUMNS);

        let mut node = VNode::element("div")
            .with_class(&styles.container)
            .with_attr(
                "style",
                format!("grid-template-columns: repeat({columns}, minmax(0, 1fr))"),
            );

        if let Some(Value::Array(items)) = record.content.get("items") {
            for item in items {
                let title = item.get("title").and_then(Value::as_str);
                let body = item.get("body").and_then(Value::as_str).unwrap_or("");

                let mut cell = VNode::element("div").with_class(&styles.content);
                if let Some(title) = title {
                    cell = cell.with_child(
                        VNode::element("h3")
                            .with_class(&styles.title)
                            .with_child(VNode::text(title)),
                    );
                }
                node = node.with_child(cell.with_child(VNode::text(body)));
            }
        }

        node
    }
}

/// Lead-capture form. `fields` is an array of input names; submissions are
/// posted to `action` by the hosting page, not by this renderer.
pub struct LeadForm;

impl Renderable for LeadForm {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        let mut node = VNode::element("form")
            .with_class(&styles.container)
            .with_attr("method", "post")
            .with_attr("action", record.str_field("action").unwrap_or("#"));

        if let Some(title) = record.str_field("title") {
            node = node.with_child(
                VNode::element("h2")
                    .with_class(&styles.title)
                    .with_child(VNode::text(title)),
            );
        }

        let fields: Vec<&str> = match record.content.get("fields") {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => vec!["name", "email"],
        };

        for field in fields {
            let input_type = if field == "email" { "email" } else { "text" };
            node = node.with_child(
                VNode::element("input")
                    .with_class(&styles.content)
                    .with_attr("name", field)
                    .with_attr("placeholder", field)
                    .with_attr("type", input_type),
            );
        }

        node.with_child(
            VNode::element("button")
                .with_class(&styles.button)
                .with_attr("type", "submit")
                .with_child(VNode::text(
                    record.str_field("submitLabel").unwrap_or("Sign up"),
                )),
        )
    }
}

/// Page footer.
pub struct Footer;

impl Renderable for Footer {
    fn render(&self, record: &ComponentRecord, styles: &StyleBundle) -> VNode {
        VNode::element("footer")
            .with_class(&styles.container)
            .with_child(
                VNode::element("p")
                    .with_class(&styles.content)
                    .with_child(VNode::text(record.str_field("text").unwrap_or(""))),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;
    use pageforge_theme::Variant;

    fn render(record: ComponentRecord) -> VNode {
        Registry::builtin()
            .render(&record, Variant::Free)
            .expect("builtin kind must render")
    }

    #[test]
    fn test_grid_clamps_columns() {
        let node = render(ComponentRecord::new("g", "Grid").with_content("columns", 42));
        let grid = &node.children()[0];
        assert_eq!(
            grid.attr("style"),
            Some("grid-template-columns: repeat(6, minmax(0, 1fr))")
        );
    }

    #[test]
    fn test_grid_defaults_to_three_columns() {
        let node = render(ComponentRecord::new("g", "Grid"));
        let grid = &node.children()[0];
        assert_eq!(
            grid.attr("style"),
            Some("grid-template-columns: repeat(3, minmax(0, 1fr))")
        );
    }

    #[test]
    fn test_grid_renders_items_in_order() {
        let record = ComponentRecord::new("g", "Grid").with_content(
            "items",
            serde_json::json!([
                {"title": "Fast", "body": "ships quick"},
                {"body": "no title card"},
            ]),
        );

        let node = render(record);
        let grid = &node.children()[0];
        assert_eq!(grid.children().len(), 2);
        assert_eq!(grid.children()[0].children()[0].tag(), Some("h3"));
        assert_eq!(grid.children()[1].children().first().and_then(VNode::tag), None);
    }

    #[test]
    fn test_image_accepts_url_alias() {
        let node = render(
            ComponentRecord::new("i", "Image").with_content("url", "https://cdn.test/a.png"),
        );
        let img = &node.children()[0].children()[0];
        assert_eq!(img.attr("src"), Some("https://cdn.test/a.png"));
    }

    #[test]
    fn test_lead_form_default_fields() {
        let node = render(ComponentRecord::new("f", "LeadForm"));
        let form = &node.children()[0];
        assert_eq!(form.tag(), Some("form"));

        let inputs: Vec<_> = form
            .children()
            .iter()
            .filter(|c| c.tag() == Some("input"))
            .collect();
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs[0].attr("name"), Some("name"));
        assert_eq!(inputs[1].attr("type"), Some("email"));
    }

    #[test]
    fn test_topbar_without_cta_has_no_link() {
        let node = render(ComponentRecord::new("t", "TopBar").with_content("title", "Acme"));
        let header = &node.children()[0];
        assert!(header.children().iter().all(|c| c.tag() != Some("a")));
    }
}
