//! Inline substitution rules
//!
//! Paragraph lines are rewritten by four regex replacements applied in a fixed order:
//!
//! | Order | Span   | TMD                 |
//! |-------|--------|---------------------|
//! | 1     | bold   | `**text**`          |
//! | 2     | italic | `//text//` or `*text*` |
//! | 3     | link   | `[[label|target]]`  |
//! | 4     | image  | `![alt|src]`        |
//!
//! Each rule replaces every non-overlapping match, shortest span first. Bold runs before italic
//! so that the star italic marker never eats half of a bold delimiter. Later rules see the
//! output of earlier ones, there is no escaping and no nesting beyond that.

use crate::format::InlineTemplates;
use crate::translator::ItalicStyle;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

static ITALIC_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"//(.*?)//").expect("italic pattern"));

// Content must be non-empty and star-free, otherwise a stray `**` would match.
static ITALIC_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*([^*]+)\*").expect("italic pattern"));

static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[(.*?)\|(.*?)\]\]").expect("link pattern"));

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\|(.*?)\]").expect("image pattern"));

/// The compiled rule set for one italic style.
#[derive(Debug, Clone, Copy)]
pub struct InlineRules {
    italic: &'static Regex,
}

impl InlineRules {
    pub fn new(style: ItalicStyle) -> Self {
        let italic = match style {
            ItalicStyle::Slash => &*ITALIC_SLASH,
            ItalicStyle::Star => &*ITALIC_STAR,
        };
        Self { italic }
    }

    /// Apply the rules to `line`, producing target markup with `templates`.
    pub fn apply(&self, line: &str, templates: &InlineTemplates) -> String {
        let rules: [(&Regex, &str); 4] = [
            (&*BOLD, templates.bold),
            (self.italic, templates.italic),
            (&*LINK, templates.link),
            (&*IMAGE, templates.image),
        ];
        let mut text = line.to_string();
        for (pattern, replacement) in rules {
            text = pattern.replace_all(&text, replacement).into_owned();
        }
        text
    }
}

impl Default for InlineRules {
    fn default() -> Self {
        Self::new(ItalicStyle::default())
    }
}
