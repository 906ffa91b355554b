//! adapter-features CLI - check project configuration against adapter features

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use adapter_features::util::shell::{ColorChoice, Shell};
use adapter_features::validate::UnsupportedFeaturesError;

mod cli;
mod commands;

use cli::{Cli, Commands, MessageFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        if let Some(unsupported) = e.downcast_ref::<UnsupportedFeaturesError>() {
            if let Some(help) = miette::Diagnostic::help(unsupported) {
                eprintln!("help: {}", help);
            }
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("adapter_features=debug")
    } else {
        EnvFilter::new("adapter_features=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        cli.color
    };
    let shell = Shell::from_flags(
        cli.quiet,
        cli.verbose,
        color,
        cli.message_format == MessageFormat::Json,
    );

    // Execute command
    match cli.command {
        Commands::Check(args) => commands::check::execute(args, &shell),
        Commands::Show(args) => commands::show::execute(args, &shell),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
