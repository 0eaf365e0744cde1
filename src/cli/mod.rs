//! irmf CLI - Command-line tools for IRMF shader documents

pub mod commands;

use crate::ParserConfig;
use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "irmf")]
#[command(version)]
#[command(about = "Check, format and complete IRMF shader documents", long_about = None)]
struct Cli {
    /// Reject headers that are not strict JSON
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Run the irmf CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = if cli.strict {
        ParserConfig::strict()
    } else {
        ParserConfig::new()
    };
    cli.command.execute(&config)?;

    Ok(())
}
