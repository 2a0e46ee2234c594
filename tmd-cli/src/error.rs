//! Errors surfaced by the command line

use thiserror::Error;

/// Everything that can make the `tmd` binary exit with a failure.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {path}")]
    InputFileNotFound { path: String },

    #[error("Error reading file '{path}': {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing file '{path}': {source}")]
    OutputWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load configuration: {0}")]
    Config(#[from] tmd_config::ConfigError),

    #[error(transparent)]
    Format(#[from] tmd_babel::FormatError),

    #[error("Unknown transform '{0}'")]
    UnknownTransform(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
