//! Markdown format implementation
//!
//! Markdown output is close to a re-serialization of the source:
//!
//! | TMD              | Markdown                    |
//! |------------------|-----------------------------|
//! | `#  Title`       | `# Title` (single space)    |
//! | `* item`         | `- item`                    |
//! | fence            | fence                       |
//! | `a | b`          | `| a | b |`                  |
//! | other lines      | unchanged                   |
//! | `**b**`          | `**b**`                     |
//! | `//i//`, `*i*`   | `*i*`                       |
//! | `[[label|url]]`  | `[label](url)`              |
//! | `![alt|src]`     | `![alt](src)`               |
//!
//! Lists and tables have no open or close tokens in Markdown. Table rows are re-emitted as-is,
//! no delimiter row is inserted after the first one.

use crate::format::{Format, InlineTemplates};
use crate::scanner::{Event, FENCE};

/// Format implementation for Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn inline_templates(&self) -> InlineTemplates {
        InlineTemplates {
            bold: "**${1}**",
            italic: "*${1}*",
            link: "[${1}](${2})",
            image: "![${1}](${2})",
        }
    }

    fn render(&self, event: &Event<'_>, out: &mut Vec<String>) {
        let line = match event {
            Event::OpenCodeBlock | Event::CloseCodeBlock => FENCE.to_string(),
            Event::CodeLine(line) => line.to_string(),
            Event::OpenList | Event::CloseList | Event::OpenTable | Event::CloseTable => return,
            Event::ListItem(text) => format!("- {text}"),
            Event::Heading { level, text } => {
                format!("{} {text}", "#".repeat(usize::from(*level)))
            }
            Event::TableRow(cells) => {
                let mut row = String::from("|");
                for cell in cells {
                    row.push(' ');
                    row.push_str(cell);
                    row.push_str(" |");
                }
                row
            }
            Event::Paragraph(text) => text.to_string(),
        };
        out.push(line);
    }
}
