use anyhow::Context;
use clap::Args;
use colored::Colorize;
use pageforge_compiler_html::{compile_page, CompileOptions};
use pageforge_model::PageDocument;
use pageforge_renderer::Registry;
use pageforge_theme::Variant;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Input page document (JSON)
    pub input: PathBuf,

    /// Output HTML file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Style variant to resolve (free, premium)
    #[arg(long, default_value = "free")]
    pub variant: String,

    /// Emit compact HTML without whitespace
    #[arg(long)]
    pub compact: bool,
}

fn parse_variant(value: &str) -> anyhow::Result<Variant> {
    match value {
        "free" => Ok(Variant::Free),
        "premium" => Ok(Variant::Premium),
        other => anyhow::bail!("invalid variant: {other}. Use: free or premium"),
    }
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let variant = parse_variant(&args.variant)?;

    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let page = PageDocument::from_json(&source)
        .with_context(|| format!("invalid page document: {}", args.input.display()))?;

    let registry = Registry::builtin();
    let rendered = registry.render_document(&page, variant);

    let skipped = page.components.len() - rendered.nodes.len();
    if skipped > 0 {
        eprintln!(
            "{} {} component(s) skipped (unknown kind)",
            "warning:".yellow().bold(),
            skipped
        );
    }

    let options = CompileOptions {
        pretty: !args.compact,
        ..CompileOptions::default()
    };
    let html = compile_page(&rendered, options);

    match &args.output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "{} {} → {} ({} components)",
                "✓".green(),
                args.input.display(),
                path.display(),
                rendered.nodes.len()
            );
        }
        None => print!("{html}"),
    }

    Ok(())
}
