//! Support code for the `tmd` binary: error type, file handling and inspect transforms.

pub mod error;
pub mod io;
pub mod transforms;

pub use error::CliError;
