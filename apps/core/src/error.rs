use std::io;
use thiserror::Error;

/// Application-wide error type for the wrapped pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    /// The archive is not valid JSON or does not have the expected shape
    /// (top-level array of conversations, each with a `mapping`).
    #[error("Data format error: {0}")]
    DataFormat(String),

    /// Represents standard input/output errors (opening the archive, writing the report).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration values (e.g., a top-N of zero).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true for errors caused by the shape of the input archive.
    pub fn is_data_format(&self) -> bool {
        matches!(self, AppError::DataFormat(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DataFormat(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}
