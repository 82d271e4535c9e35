use pageforge_renderer::{RenderedPage, VNode};

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit a full document shell (doctype, head, body)
    pub doctype: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            doctype: true,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Elements serialized without a closing tag.
fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Serialize a rendered page to an HTML string.
pub fn compile_page(page: &RenderedPage, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    if ctx.options.doctype {
        ctx.add_line("<!DOCTYPE html>");
        ctx.add_line("<html>");
        ctx.indent();

        ctx.add_line("<head>");
        ctx.indent();
        ctx.add_line("<meta charset=\"UTF-8\">");
        ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
        ctx.add_line(&format!("<title>{}</title>", escape_text(&page.name)));
        ctx.dedent();
        ctx.add_line("</head>");

        ctx.add_line("<body>");
        ctx.indent();
    }

    for node in &page.nodes {
        compile_node_into(node, &mut ctx);
    }

    if ctx.options.doctype {
        ctx.dedent();
        ctx.add_line("</body>");
        ctx.dedent();
        ctx.add_line("</html>");
    }

    ctx.get_output()
}

/// Serialize a single node (no document shell).
pub fn compile_node(node: &VNode, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    compile_node_into(node, &mut ctx);
    ctx.get_output()
}

fn compile_node_into(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Element {
            tag,
            attributes,
            children,
        } => {
            let mut open = format!("<{tag}");
            // BTreeMap iteration keeps attribute order stable.
            for (key, value) in attributes {
                open.push_str(&format!(" {key}=\"{}\"", escape_attr(value)));
            }
            open.push('>');

            if is_void_element(tag) {
                ctx.add_line(&open);
                return;
            }

            if children.is_empty() {
                ctx.add_line(&format!("{open}</{tag}>"));
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                compile_node_into(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{tag}>"));
        }

        VNode::Text { content } => {
            ctx.add_line(&escape_text(content));
        }

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", escape_text(content)));
        }
    }
}
