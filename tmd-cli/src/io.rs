//! Reading sources and writing results

use crate::error::CliError;
use std::fs;
use std::io::ErrorKind;

/// Read a TMD source file as UTF-8.
pub fn read_source(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => CliError::InputFileNotFound {
            path: path.to_string(),
        },
        _ => CliError::InputRead {
            path: path.to_string(),
            source,
        },
    })
}

/// Write a translated document, replacing the file if it exists.
pub fn write_output(path: &str, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::OutputWriteFailure {
        path: path.to_string(),
        source,
    })
}
