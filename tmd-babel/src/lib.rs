//! Translation of TMD documents into HTML and Markdown
//!
//!     TMD is a small line-oriented markup: headings, unordered lists, code fences, tables and a
//!     handful of inline spans (bold, italic, links, images). This crate turns a TMD buffer into
//!     either HTML or Markdown text.
//!
//!     This is a pure lib, that is, it powers tmd-cli but is shell agnostic: no code here should
//!     suppose a shell environment, be it printing to std streams, env vars, etc.
//!
//! Architecture
//!
//!     Translation is split in two halves so that the format specific code stays small:
//!
//!     - The scanner (./scanner/mod.rs) walks the document once, top to bottom, keeping an
//!       explicit ParserState (code block, list and table flags). It classifies each line and
//!       produces a flat stream of Events (open list, list item, heading, table row, ...).
//!     - A Format (./format.rs) renders each event into output lines. Paragraph events are run
//!       through the inline rules (./inline.rs) first, with templates supplied by the format.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── document.rs             # Document: the buffered input, as lines
//!     ├── format.rs               # Format trait, OutputFormat, inline templates
//!     ├── formats
//!     │   ├── html.rs
//!     │   └── markdown.rs
//!     ├── scanner
//!     │   ├── mod.rs              # Line classification and the state machine
//!     │   └── table.rs            # Row cell splitting
//!     ├── inline.rs               # Ordered regex substitutions
//!     ├── translator.rs           # Scanner + format glue, TranslateOptions
//!     ├── registry.rs             # FormatRegistry for selection by name
//!     └── lib.rs
//!
//! Leniency
//!
//!     The translator never fails. Malformed input is absorbed instead of reported: a list or
//!     table still open at the end of input is closed, and a fence without its closing partner
//!     keeps every following line verbatim and is closed at the end of input. The output is
//!     therefore always structurally balanced.
//!
//! Variants
//!
//!     Two knobs cover the dialects TMD has been written in, see [`TranslateOptions`]:
//!     - italic marker: `//text//` (default) or `*text*`
//!     - table support: off by default, since any line containing `|` becomes a table row
//!       when it is on.
//!
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod inline;
pub mod registry;
pub mod scanner;
pub mod translator;

pub use document::Document;
pub use error::FormatError;
pub use format::{Format, OutputFormat};
pub use registry::FormatRegistry;
pub use scanner::{classify_document, ClassifiedLine, LineKind};
pub use translator::{ItalicStyle, TranslateOptions, Translator};

/// Translates TMD `text` into `format` with the default options.
///
/// Total over all inputs: the empty string yields the empty string and malformed markup is
/// handled by the leniency policies rather than reported.
pub fn translate(text: &str, format: OutputFormat) -> String {
    Translator::default().translate(text, format.format())
}
