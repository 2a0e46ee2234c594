//! Error types for format operations

use thiserror::Error;

/// Errors that can occur when selecting or configuring a format.
///
/// Translation itself never fails; these only come from resolving names given by a caller
/// (command line, configuration files).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Italic marker style name not recognized
    #[error("Unknown italic style '{0}' (expected 'slash' or 'star')")]
    UnknownItalicStyle(String),
}
