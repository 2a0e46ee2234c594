//! Shared configuration loader for the tmd toolchain.
//!
//! `defaults/tmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tmd_babel::{ItalicStyle, TranslateOptions};

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/tmd.default.toml");

/// Name of the optional per-directory configuration file.
pub const CONFIG_FILE_NAME: &str = "tmd.toml";

/// Top-level configuration consumed by tmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdConfig {
    pub convert: ConvertConfig,
}

/// Conversion defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// Output format name, resolved through the format registry.
    pub format: String,
    pub markup: MarkupConfig,
}

/// Mirrors the knobs exposed by the translator.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MarkupConfig {
    pub italic: ItalicStyle,
    pub tables: bool,
}

impl From<MarkupConfig> for TranslateOptions {
    fn from(config: MarkupConfig) -> Self {
        TranslateOptions {
            italic: config.italic,
            tables: config.tables,
        }
    }
}

impl From<&MarkupConfig> for TranslateOptions {
    fn from(config: &MarkupConfig) -> Self {
        (*config).into()
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TmdConfig, ConfigError> {
    Loader::new().build()
}
