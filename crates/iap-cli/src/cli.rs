//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// ai-iap - compile .ai-iap/config.json into AI tool rule files
#[derive(Parser, Debug)]
#[command(name = "ai-iap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root containing .ai-iap/
    #[arg(long, global = true, env = "AI_IAP_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Config file [default: <root>/.ai-iap/config.json]
    #[arg(long, global = true, env = "AI_IAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check config.json and report every finding
    ///
    /// Exits 0 when there are no errors (warnings allowed), 1 otherwise.
    Validate {
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate rule files for the selected languages and tools
    ///
    /// Examples:
    ///   ai-iap generate -l python -t cursor
    ///   ai-iap generate -l python,typescript -f django -s modular
    ///   ai-iap generate -l python --on-demand --dry-run
    Generate(GenerateArgs),

    /// Show what config.json defines
    List {
        /// What to list
        #[arg(value_enum, default_value_t = ListKind::Tools)]
        kind: ListKind,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Languages to include (general is always added)
    #[arg(short = 'l', long = "language", value_delimiter = ',', required = true)]
    pub languages: Vec<String>,

    /// Tools to generate for [default: settings default_tools, else all]
    #[arg(short = 't', long = "tool", value_delimiter = ',')]
    pub tools: Vec<String>,

    /// Frameworks, bare or as <language>/<framework>
    #[arg(short = 'f', long = "framework", value_delimiter = ',')]
    pub frameworks: Vec<String>,

    /// Structures, bare or qualified
    #[arg(short = 's', long = "structure", value_delimiter = ',')]
    pub structures: Vec<String>,

    /// Explicit processes, including on-demand ones
    #[arg(short = 'p', long = "process", value_delimiter = ',')]
    pub processes: Vec<String>,

    /// Include every on-demand process of the selected languages
    #[arg(long)]
    pub on_demand: bool,

    /// Destination root [default: project root]
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Show what would be written without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Generate tools one after another instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Tools,
    Languages,
    Processes,
}
