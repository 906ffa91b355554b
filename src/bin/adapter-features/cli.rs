//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell as CompletionShell;

use adapter_features::core::OutputMode;
use adapter_features::util::shell::ColorChoice;

/// Check a project's configuration against the features an adapter supports
#[derive(Parser)]
#[command(name = "adapter-features")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,

    /// Disable colored output (same as --color never)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output format for messages
    #[arg(long, global = true, value_enum, default_value_t = MessageFormat::Human)]
    pub message_format: MessageFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MessageFormat {
    Human,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a project configuration against an adapter manifest
    Check(CheckArgs),

    /// Show the features an adapter declares, with defaults applied
    Show(ShowArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the adapter manifest
    #[arg(short, long, env = "ADAPTER_FEATURES_ADAPTER")]
    pub adapter: PathBuf,

    /// Path to the project config (defaults to ./project.toml if present)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Override the output mode
    #[arg(long, value_parser = parse_output_mode)]
    pub output: Option<OutputMode>,

    /// Override the image service entrypoint
    #[arg(long)]
    pub image_service: Option<String>,

    /// Exit successfully even if some features are unsupported
    #[arg(long)]
    pub allow_unsupported: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Path to the adapter manifest
    #[arg(short, long, env = "ADAPTER_FEATURES_ADAPTER")]
    pub adapter: PathBuf,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: CompletionShell,
}

fn parse_output_mode(s: &str) -> Result<OutputMode, String> {
    s.parse().map_err(|e| format!("{}", e))
}
