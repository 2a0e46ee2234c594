//! Format trait definition
//!
//! This module defines the Format trait that every output format implements, and the
//! [`OutputFormat`] selector for the built-in ones. A format never sees raw TMD: it receives the
//! scanner's events one at a time and appends the lines they render to.

use crate::error::FormatError;
use crate::formats::{HtmlFormat, MarkdownFormat};
use crate::scanner::Event;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Replacement templates for the inline rules, in `regex` replacement syntax.
///
/// Bold and italic templates receive the span content as `${1}`. Link and image templates
/// receive the label (alt text) as `${1}` and the target (source) as `${2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineTemplates {
    pub bold: &'static str,
    pub italic: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct Plain;
///
/// impl Format for Plain {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn inline_templates(&self) -> InlineTemplates {
///         InlineTemplates { bold: "${1}", italic: "${1}", link: "${1}", image: "${1}" }
///     }
///
///     fn render(&self, event: &Event<'_>, out: &mut Vec<String>) {
///         // push zero or more lines for the event
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Templates used to rewrite inline spans of paragraph lines.
    fn inline_templates(&self) -> InlineTemplates;

    /// Render one event, appending zero or more output lines to `out`.
    ///
    /// Paragraph events arrive with inline substitution already applied.
    fn render(&self, event: &Event<'_>, out: &mut Vec<String>);
}

/// The built-in output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
}

impl OutputFormat {
    /// Names accepted on the command line and in configuration files.
    pub const NAMES: &'static [&'static str] = &["html", "markdown"];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// Conventional extension of files holding this format.
    pub fn file_extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "md",
        }
    }

    /// The format implementation behind this selector.
    pub fn format(self) -> &'static dyn Format {
        match self {
            OutputFormat::Html => &HtmlFormat,
            OutputFormat::Markdown => &MarkdownFormat,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(FormatError::FormatNotFound(other.to_string())),
        }
    }
}
