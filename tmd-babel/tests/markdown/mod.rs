//! Markdown format tests (TMD → Markdown)

mod export;
mod table;
