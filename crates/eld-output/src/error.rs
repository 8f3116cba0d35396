//! Error types for eld-output.

use thiserror::Error;

/// Errors that can occur while writing log artifacts.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("unknown artifact format {0:?}: expected \"csv\", \"svg\", or \"none\"")]
    UnknownFormat(String),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
