//! Inspect transforms
//!
//! Views of how the scanner reads a document, one entry per source line:
//!
//! - `lines-simple`: `<number>  <kind>  <text>`, with `code` for lines inside a code block
//! - `lines-json`: the same data as a JSON array
//!
//! Example: `tmd inspect notes.tmd lines-json --extra-tables`

use crate::error::CliError;
use tmd_babel::{classify_document, ClassifiedLine, Document, TranslateOptions};

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["lines-simple", "lines-json"];

pub const DEFAULT_TRANSFORM: &str = "lines-simple";

/// Execute a named transform on source text
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    options: &TranslateOptions,
) -> Result<String, CliError> {
    let lines = classify_document(&Document::from_text(source), options);
    match transform_name {
        "lines-simple" => Ok(to_simple(&lines)),
        "lines-json" => Ok(serde_json::to_string_pretty(&lines)?),
        other => Err(CliError::UnknownTransform(other.to_string())),
    }
}

fn to_simple(lines: &[ClassifiedLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let kind = line.kind.map_or("code", |kind| kind.as_str());
        out.push_str(&format!("{:>4}  {:<10}  {}\n", line.number, kind, line.text));
    }
    out
}
