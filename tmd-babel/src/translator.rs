//! The configurable translator
//!
//! Glues the scanner to a format: events are rendered one by one, paragraph text first going
//! through the inline rules with the format's templates.

use crate::document::Document;
use crate::error::FormatError;
use crate::format::Format;
use crate::inline::InlineRules;
use crate::scanner::{scan, Event};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker used for italic spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItalicStyle {
    /// `//text//`
    #[default]
    Slash,
    /// `*text*`
    Star,
}

impl ItalicStyle {
    pub fn name(self) -> &'static str {
        match self {
            ItalicStyle::Slash => "slash",
            ItalicStyle::Star => "star",
        }
    }
}

impl fmt::Display for ItalicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ItalicStyle {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slash" => Ok(ItalicStyle::Slash),
            "star" => Ok(ItalicStyle::Star),
            other => Err(FormatError::UnknownItalicStyle(other.to_string())),
        }
    }
}

/// Knobs selecting the TMD dialect being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslateOptions {
    pub italic: ItalicStyle,
    /// Treat lines containing `|` as table rows.
    pub tables: bool,
}

/// Translates TMD text with a fixed set of options.
///
/// Holds no per-document state: every call scans with a fresh parser state, so one
/// translator can serve any number of calls, from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    options: TranslateOptions,
    rules: InlineRules,
}

impl Translator {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            options,
            rules: InlineRules::new(options.italic),
        }
    }

    /// Translate `text` into `format`.
    pub fn translate(&self, text: &str, format: &dyn Format) -> String {
        self.translate_document(&Document::from_text(text), format)
    }

    /// Translate an already split document into `format`.
    pub fn translate_document(&self, doc: &Document, format: &dyn Format) -> String {
        debug!(
            "translating {} lines to {} ({:?})",
            doc.len(),
            format.name(),
            self.options
        );
        let templates = format.inline_templates();
        let mut out = Vec::with_capacity(doc.len());
        for event in scan(doc, self.options.tables) {
            match event {
                Event::Paragraph(text) => {
                    let text = self.rules.apply(text, &templates);
                    format.render(&Event::Paragraph(&text), &mut out);
                }
                other => format.render(&other, &mut out),
            }
        }
        out.join("\n")
    }
}
