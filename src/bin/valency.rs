//! valency CLI - Enumerate actor interleavings and classify their valency
//!
//! This CLI provides:
//! - A textual dump of the classified execution tree
//! - A census of labels, outcomes and critical positions

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "valency")]
#[command(version, about = "Valency analysis of actor interleavings", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the classified execution tree
    Dump(valency::cli::commands::dump::DumpArgs),

    /// Count labels across the classified tree
    Census(valency::cli::commands::census::CensusArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dump(args) => valency::cli::commands::dump::execute(args),
        Commands::Census(args) => valency::cli::commands::census::execute(args),
    }
}
