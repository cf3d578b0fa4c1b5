//! Tint CLI - inline markup checker.
//!
//! Provides commands for:
//! - `check`: Validate markup in translation catalogs
//! - `render`: Print the styled runs of a markup string
//! - `inspect`: Print runs with their diagnostics

mod catalog;
mod commands;
mod error;
mod output;
mod validate;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, InspectArgs, RenderArgs};
use output::Output;

/// Tint - inline markup checker.
#[derive(Parser)]
#[command(name = "tint", version, about)]
struct Cli {
    /// Enable info-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate markup in translation catalogs.
    Check(CheckArgs),
    /// Print the styled runs of a markup string.
    Render(RenderArgs),
    /// Print runs with unrecognized-markup diagnostics.
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Render(args) => args.execute(&output),
        Commands::Inspect(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
