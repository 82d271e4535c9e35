use anyhow::Context;
use clap::Args;
use colored::Colorize;
use pageforge_model::PageDocument;
use pageforge_renderer::Registry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input page document (JSON)
    pub input: PathBuf,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let page = PageDocument::from_json(&source)
        .with_context(|| format!("invalid page document: {}", args.input.display()))?;

    let registry = Registry::builtin();

    // Theme coverage over registered kinds is a configuration error.
    let kinds: Vec<&str> = registry.kinds().collect();
    registry
        .theme()
        .validate(kinds.iter().copied())
        .context("theme does not cover every registered kind")?;

    // Unknown kinds in the page degrade at render time; report, don't fail.
    let mut unknown = 0;
    let mut seen = std::collections::HashSet::new();
    for record in &page.components {
        if !registry.contains(&record.kind) {
            unknown += 1;
            println!(
                "{} component '{}' has unregistered kind '{}'",
                "warning:".yellow().bold(),
                record.id,
                record.kind
            );
        }
        if !seen.insert(record.id.as_str()) {
            anyhow::bail!("duplicate component id: {}", record.id);
        }
    }

    println!(
        "{} {}: {} components, {} unknown kind(s)",
        "✓".green(),
        args.input.display(),
        page.components.len(),
        unknown
    );

    Ok(())
}
