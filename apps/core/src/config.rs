//! Runtime configuration.
//!
//! Values come from command-line flags, falling back to `WRAPPED_*`
//! environment variables (a `.env` file is honoured) and then to defaults.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

use crate::error::AppError;

/// Default archive file name
pub const DEFAULT_INPUT: &str = "conversations.json";
/// Default number of ranked topics
pub const DEFAULT_TOP_N: usize = 3;
/// Default number of sample messages
pub const DEFAULT_SAMPLE_SIZE: usize = 3;

/// Tuning knobs of the analysis.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Validate)]
pub struct AnalysisConfig {
    /// How many topics to rank in the report.
    #[validate(range(min = 1, max = 20))]
    pub top_n: usize,
    /// How many main-topic messages to quote in the report.
    #[validate(range(max = 100))]
    pub sample_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            sample_size: DEFAULT_SAMPLE_SIZE,
        }
    }
}

/// Command-line interface
#[derive(Debug, Clone, Parser)]
#[command(name = "wrapped", version, about = "Summarize the topics and intents of an exported chat archive")]
pub struct Cli {
    /// Path to the exported conversations archive
    #[arg(env = "WRAPPED_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Number of top topics to report
    #[arg(long = "top", env = "WRAPPED_TOP_N", default_value_t = DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Number of sample messages about the main topic
    #[arg(long = "samples", env = "WRAPPED_SAMPLE_SIZE", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample_size: usize,

    /// Write the report to this file instead of stdout
    #[arg(long, short, env = "WRAPPED_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print the report on a single line
    #[arg(long, default_value_t = false)]
    pub compact: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    /// Builds and validates the analysis config from the parsed flags.
    pub fn analysis_config(&self) -> Result<AnalysisConfig, AppError> {
        let config = AnalysisConfig {
            top_n: self.top_n,
            sample_size: self.sample_size,
        };
        config.validate()?;
        Ok(config)
    }
}
