mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, render, CheckArgs, RenderArgs};

/// Pageforge CLI - render and check landing-page documents
#[derive(Parser, Debug)]
#[command(name = "pageforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page document to HTML
    Render(RenderArgs),

    /// Check a page document against the registry and theme
    Check(CheckArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render(args) => render::run(args),
        Command::Check(args) => check::run(args),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
