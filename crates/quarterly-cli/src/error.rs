//! CLI error types.

use quarterly_facade::InvalidInputError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the command line tool.
#[derive(Debug, Error)]
pub enum CliError {
    /// The analysis rejected its input
    #[error(transparent)]
    Analysis(#[from] InvalidInputError),

    /// Output directory could not be prepared
    #[error("Failed to create output directory {path:?}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chart rendering failed
    #[error("Failed to render {path:?}: {message}")]
    Chart { path: PathBuf, message: String },

    /// Report could not be encoded
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = std::result::Result<T, CliError>;
