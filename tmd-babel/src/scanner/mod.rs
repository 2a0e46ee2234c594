//! Line scanner
//!
//! One pass over the document, top to bottom. Each line is classified by its prefix and fed to
//! a [`ParserState`], which turns it into zero or more [`Event`]s. Grouping constructs (lists and
//! tables) are opened on their first line and closed by the first line that does not belong to
//! them, or by the end of input.
//!
//! Classification priority, first match wins:
//!
//! | Kind      | Test                                             |
//! |-----------|--------------------------------------------------|
//! | Fence     | trimmed line is exactly three backticks          |
//! | ListItem  | trimmed line starts with `* `                    |
//! | Heading3  | line starts with `### `                          |
//! | Heading2  | line starts with `## `                           |
//! | Heading1  | line starts with `# `                            |
//! | TableRow  | line contains `|` (only with table support on)   |
//! | Plain     | anything else, blank lines included              |

pub mod table;

use crate::document::Document;
use crate::translator::TranslateOptions;
use log::{debug, trace};
use serde::Serialize;

/// The code fence marker.
pub const FENCE: &str = "```";
/// Prefix of an unordered list item, checked on the trimmed line.
pub const LIST_MARKER: &str = "* ";
/// Column separator of table rows.
pub const TABLE_SEPARATOR: char = '|';

/// Most specific prefix first, so `## ` is never taken for `# `.
const HEADING_PREFIXES: [(&str, LineKind); 3] = [
    ("### ", LineKind::Heading3),
    ("## ", LineKind::Heading2),
    ("# ", LineKind::Heading1),
];

/// Classification of a line outside a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    Heading1,
    Heading2,
    Heading3,
    ListItem,
    TableRow,
    Fence,
    Plain,
}

impl LineKind {
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineKind::Heading1 => Some(1),
            LineKind::Heading2 => Some(2),
            LineKind::Heading3 => Some(3),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Heading1 => "heading-1",
            LineKind::Heading2 => "heading-2",
            LineKind::Heading3 => "heading-3",
            LineKind::ListItem => "list-item",
            LineKind::TableRow => "table-row",
            LineKind::Fence => "fence",
            LineKind::Plain => "plain",
        }
    }
}

/// Events produced by the scanner, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    OpenCodeBlock,
    /// A line inside a code block, untouched.
    CodeLine(&'a str),
    CloseCodeBlock,
    OpenList,
    /// Item text: the trimmed line without its marker.
    ListItem(&'a str),
    CloseList,
    /// Heading text is trimmed.
    Heading { level: u8, text: &'a str },
    OpenTable,
    /// Trimmed cells, without the empty ones produced by outer separators.
    TableRow(Vec<&'a str>),
    CloseTable,
    /// The raw line, before inline substitution.
    Paragraph(&'a str),
}

/// Classify a line by its prefix. The code block flag is not consulted here; callers skip
/// classification for lines inside a code block.
pub fn classify(line: &str, tables: bool) -> LineKind {
    let trimmed = line.trim();
    if trimmed == FENCE {
        return LineKind::Fence;
    }
    if trimmed.starts_with(LIST_MARKER) {
        return LineKind::ListItem;
    }
    for (prefix, kind) in HEADING_PREFIXES {
        if line.starts_with(prefix) {
            return kind;
        }
    }
    if tables && line.contains(TABLE_SEPARATOR) {
        return LineKind::TableRow;
    }
    LineKind::Plain
}

/// Mutable scanning state, created fresh for every document.
///
/// `in_code_block` suppresses every other classification. At most one of `in_list` and
/// `in_table` is set at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    pub in_code_block: bool,
    pub in_list: bool,
    pub in_table: bool,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line, pushing the events it produces.
    pub fn step<'a>(&mut self, line: &'a str, tables: bool, events: &mut Vec<Event<'a>>) {
        if self.in_code_block {
            if line.trim() == FENCE {
                self.in_code_block = false;
                events.push(Event::CloseCodeBlock);
            } else {
                events.push(Event::CodeLine(line));
            }
            return;
        }

        let kind = classify(line, tables);
        trace!("{kind:?}: {line:?}");

        if kind != LineKind::ListItem {
            self.close_list(events);
        }
        if kind != LineKind::TableRow {
            self.close_table(events);
        }

        match kind {
            LineKind::Fence => {
                self.in_code_block = true;
                events.push(Event::OpenCodeBlock);
            }
            LineKind::ListItem => {
                if !self.in_list {
                    self.in_list = true;
                    events.push(Event::OpenList);
                }
                let item = line
                    .trim()
                    .strip_prefix(LIST_MARKER)
                    .unwrap_or_default();
                events.push(Event::ListItem(item));
            }
            LineKind::Heading1 | LineKind::Heading2 | LineKind::Heading3 => {
                let level = kind.heading_level().unwrap_or(1);
                let prefix_len = usize::from(level) + 1;
                events.push(Event::Heading {
                    level,
                    text: line[prefix_len..].trim(),
                });
            }
            LineKind::TableRow => {
                if !self.in_table {
                    self.in_table = true;
                    events.push(Event::OpenTable);
                }
                events.push(Event::TableRow(table::split_cells(line)));
            }
            LineKind::Plain => events.push(Event::Paragraph(line)),
        }
    }

    /// Close whatever is still open at the end of input.
    pub fn finish(&mut self, events: &mut Vec<Event<'_>>) {
        if self.in_code_block {
            debug!("closing unterminated code fence at end of input");
            self.in_code_block = false;
            events.push(Event::CloseCodeBlock);
        }
        self.close_list(events);
        self.close_table(events);
    }

    fn close_list(&mut self, events: &mut Vec<Event<'_>>) {
        if self.in_list {
            self.in_list = false;
            events.push(Event::CloseList);
        }
    }

    fn close_table(&mut self, events: &mut Vec<Event<'_>>) {
        if self.in_table {
            self.in_table = false;
            events.push(Event::CloseTable);
        }
    }
}

/// Scan a whole document into events.
pub fn scan(doc: &Document, tables: bool) -> Vec<Event<'_>> {
    let mut state = ParserState::new();
    let mut events = Vec::with_capacity(doc.len() + 2);
    for line in doc.lines() {
        state.step(line, tables, &mut events);
    }
    state.finish(&mut events);
    events
}

/// A line together with its classification, as reported by [`classify_document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    /// 1-based line number.
    pub number: usize,
    /// `None` for lines passed through verbatim inside a code block.
    pub kind: Option<LineKind>,
    pub text: String,
}

/// Classify every line of `doc`, tracking code blocks the same way the scanner does.
pub fn classify_document(doc: &Document, options: &TranslateOptions) -> Vec<ClassifiedLine> {
    let mut in_code_block = false;
    doc.lines()
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let kind = if in_code_block && line.trim() != FENCE {
                None
            } else {
                let kind = classify(line, options.tables);
                if kind == LineKind::Fence {
                    in_code_block = !in_code_block;
                }
                Some(kind)
            };
            ClassifiedLine {
                number: index + 1,
                kind,
                text: line.clone(),
            }
        })
        .collect()
}
