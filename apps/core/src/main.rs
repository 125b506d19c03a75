// Conversation Wrapped entry point
// Reads an exported archive and prints the topic / intent summary as JSON.

use anyhow::Context;
use clap::Parser;
use std::io;
use tracing_subscriber::EnvFilter;
use wrapped_core::config::Cli;

/// Logs go to stderr so stdout only carries the report.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut stdout = io::stdout().lock();
    wrapped_core::run(&cli, &mut stdout)
        .with_context(|| format!("Failed to summarize {}", cli.input.display()))?;

    Ok(())
}
