//! ai-iap CLI
//!
//! Validates `.ai-iap/config.json` and generates per-tool rule files from it.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::ProjectContext;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Returns the process exit code.
fn run() -> Result<i32> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} could not initialise logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(root = %cli.root.display(), "starting");

    let ctx = ProjectContext::new(&cli.root, cli.config.as_deref());

    match cli.command {
        Commands::Validate { json } => commands::run_validate(&ctx, json),
        Commands::Generate(args) => commands::run_generate(&ctx, args),
        Commands::List { kind } => commands::run_list(&ctx, kind),
    }
}
