//! HTML format implementation
//!
//! # Element Mapping Table
//!
//! | TMD              | HTML                                   |
//! |------------------|----------------------------------------|
//! | `# ` … `### `    | `<h1>` … `<h3>`, text trimmed          |
//! | `* item`         | `<li>` inside a `<ul>` per run         |
//! | fence            | `<pre><code>` / `</code></pre>`        |
//! | `a | b`          | `<tr><td>` inside a `<table>` per run  |
//! | other lines      | `<p>`                                  |
//! | `**b**`          | `<strong>`                             |
//! | `//i//`, `*i*`   | `<em>`                                 |
//! | `[[label|url]]`  | `<a href="url">label</a>`              |
//! | `![alt|src]`     | `<img src="src" alt="alt"/>`           |
//!
//! Output is a fragment, one element per line, with no document wrapper. Text is not escaped:
//! markup characters in the source reach the output unchanged.

use crate::format::{Format, InlineTemplates};
use crate::scanner::Event;

/// Format implementation for HTML fragments
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn inline_templates(&self) -> InlineTemplates {
        InlineTemplates {
            bold: "<strong>${1}</strong>",
            italic: "<em>${1}</em>",
            link: r#"<a href="${2}">${1}</a>"#,
            image: r#"<img src="${2}" alt="${1}"/>"#,
        }
    }

    fn render(&self, event: &Event<'_>, out: &mut Vec<String>) {
        let line = match event {
            Event::OpenCodeBlock => "<pre><code>".to_string(),
            Event::CodeLine(line) => line.to_string(),
            Event::CloseCodeBlock => "</code></pre>".to_string(),
            Event::OpenList => "<ul>".to_string(),
            Event::ListItem(text) => format!("<li>{text}</li>"),
            Event::CloseList => "</ul>".to_string(),
            Event::Heading { level, text } => format!("<h{level}>{text}</h{level}>"),
            Event::OpenTable => "<table>".to_string(),
            Event::TableRow(cells) => {
                let cells: String = cells.iter().map(|cell| format!("<td>{cell}</td>")).collect();
                format!("<tr>{cells}</tr>")
            }
            Event::CloseTable => "</table>".to_string(),
            Event::Paragraph(text) => format!("<p>{text}</p>"),
        };
        out.push(line);
    }
}
