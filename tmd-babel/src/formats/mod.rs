//! Format implementations
//!
//! Each format renders scanner events into lines of its target syntax.

pub mod html;
pub mod markdown;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
