//! Conversation Wrapped core.
//!
//! Loads an exported chat archive, classifies every user message by type
//! and topic, and renders a small JSON summary.

pub mod archive;
pub mod brain;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::Write;
use tracing::{info, warn};

use brain::{WrappedAnalyzer, WrappedReport};
use config::Cli;
use error::AppError;

/// Notice printed instead of a report when the archive has no user messages
pub const NO_USER_MESSAGES: &str = "No user messages found.";

/// Result of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A report was produced
    Report(WrappedReport),
    /// Nothing to analyze; only the notice was printed
    NoUserMessages,
}

/// Runs the whole pipeline for the parsed command line.
///
/// The report (or the empty notice) is written to `out`, unless `--output`
/// names a file, in which case the report goes there.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RunOutcome, AppError> {
    let config = cli.analysis_config()?;

    let archive = archive::load_archive(&cli.input)?;
    let messages = archive.user_messages()?;

    let analyzer = WrappedAnalyzer::new(config);
    let Some(report) = analyzer.analyze(&messages) else {
        warn!("No user messages found in {:?}", cli.input);
        writeln!(out, "{}", NO_USER_MESSAGES)?;
        return Ok(RunOutcome::NoUserMessages);
    };

    let json = report.to_json(!cli.compact)?;
    match &cli.output {
        Some(path) => {
            let mut file = File::create(path)?;
            writeln!(file, "{}", json)?;
            info!("Report written to {:?}", path);
        }
        None => writeln!(out, "{}", json)?,
    }

    Ok(RunOutcome::Report(report))
}
