use crate::{compile_node, compile_page, CompileOptions};
use pageforge_model::{ComponentRecord, PageDocument};
use pageforge_renderer::{Registry, RenderedPage, VNode};
use pageforge_theme::Variant;

fn compact() -> CompileOptions {
    CompileOptions {
        doctype: false,
        pretty: false,
        indent: String::new(),
    }
}

#[test]
fn test_compile_full_page_shell() {
    let registry = Registry::builtin();
    let page = PageDocument::new("p", "My Landing", "u")
        .with_component(ComponentRecord::new("h", "Hero").with_content("title", "Launch day"));

    let rendered = registry.render_document(&page, Variant::Free);
    let html = compile_page(&rendered, CompileOptions::default());

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>My Landing</title>"));
    assert!(html.contains("Launch day"));
    assert!(html.contains("data-component-id=\"h\""));
    assert!(html.contains("</html>"));
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let node = VNode::element("div")
        .with_attr("title", "a \"quoted\" <value>")
        .with_child(VNode::text("1 < 2 && 3 > 2"));

    let html = compile_node(&node, compact());
    assert_eq!(
        html,
        "<div title=\"a &quot;quoted&quot; &lt;value&gt;\">1 &lt; 2 &amp;&amp; 3 &gt; 2</div>"
    );
}

#[test]
fn test_void_elements_have_no_closing_tag() {
    let node = VNode::element("img").with_attr("src", "/a.png");
    let html = compile_node(&node, compact());
    assert_eq!(html, "<img src=\"/a.png\">");
}

#[test]
fn test_attribute_order_is_stable() {
    let node = VNode::element("a")
        .with_attr("href", "/x")
        .with_attr("class", "btn")
        .with_attr("data-z", "1");

    let first = compile_node(&node, compact());
    let second = compile_node(&node, compact());
    assert_eq!(first, second);
    // Sorted attribute order: class before data-z before href.
    assert_eq!(first, "<a class=\"btn\" data-z=\"1\" href=\"/x\"></a>");
}

#[test]
fn test_pretty_output_indents_children() {
    let page = RenderedPage {
        name: "n".to_string(),
        nodes: vec![VNode::element("div").with_child(VNode::text("hi"))],
    };

    let html = compile_page(
        &page,
        CompileOptions {
            doctype: false,
            pretty: true,
            indent: "  ".to_string(),
        },
    );

    assert_eq!(html, "<div>\n  hi\n</div>\n");
}

#[test]
fn test_compact_output_has_no_whitespace() {
    let page = RenderedPage {
        name: "n".to_string(),
        nodes: vec![VNode::element("div").with_child(VNode::text("hi"))],
    };

    let html = compile_page(&page, compact());
    assert_eq!(html, "<div>hi</div>");
}

#[test]
fn test_comment_nodes_round_trip_content() {
    let node = VNode::comment("placeholder");
    assert_eq!(compile_node(&node, compact()), "<!-- placeholder -->");
}
