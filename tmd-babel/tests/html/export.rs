//! Export tests for the HTML format
//!
//! These tests verify that TMD documents are converted to the expected HTML fragment.

use insta::assert_snapshot;
use tmd_babel::{translate, ItalicStyle, OutputFormat, TranslateOptions, Translator};

fn tmd_to_html(src: &str) -> String {
    translate(src, OutputFormat::Html)
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_paragraph_simple() {
    assert_eq!(tmd_to_html("Just text."), "<p>Just text.</p>");
}

#[test]
fn test_blank_line_is_an_empty_paragraph() {
    assert_eq!(tmd_to_html("a\n\nb"), "<p>a</p>\n<p></p>\n<p>b</p>");
}

#[test]
fn test_heading_levels() {
    assert_eq!(tmd_to_html("# One"), "<h1>One</h1>");
    assert_eq!(tmd_to_html("## Two"), "<h2>Two</h2>");
    assert_eq!(tmd_to_html("### Three"), "<h3>Three</h3>");
}

#[test]
fn test_heading_precedence() {
    let html = tmd_to_html("### Title");
    assert!(html.contains("<h3>Title</h3>"));
    assert!(!html.contains("<h1>"));
    assert!(!html.contains("<h2>"));
}

#[test]
fn test_heading_text_is_trimmed() {
    assert_eq!(tmd_to_html("#    Spaced out   "), "<h1>Spaced out</h1>");
}

#[test]
fn test_list_grouping() {
    let html = tmd_to_html("* one\n* two\ntext");
    assert_eq!(
        html,
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>text</p>"
    );
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
}

#[test]
fn test_indented_list_items() {
    assert_eq!(
        tmd_to_html("  * one\n\t* two"),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
    );
}

#[test]
fn test_code_block_is_verbatim() {
    assert_eq!(
        tmd_to_html("```\n  **not bold**\n# not heading\n```"),
        "<pre><code>\n  **not bold**\n# not heading\n</code></pre>"
    );
}

#[test]
fn test_link_and_image() {
    assert_eq!(
        tmd_to_html("[[Home|/index]]"),
        r#"<p><a href="/index">Home</a></p>"#
    );
    assert_eq!(
        tmd_to_html("![Logo|/logo.png]"),
        r#"<p><img src="/logo.png" alt="Logo"/></p>"#
    );
}

#[test]
fn test_bold_wraps_italic_markers() {
    let html = tmd_to_html("**a // b //**");
    assert_eq!(html.matches("<strong>").count(), 1);
    assert_eq!(html.matches("</strong>").count(), 1);
    assert!(html.starts_with("<p><strong>"));
    assert!(html.ends_with("</strong></p>"));
}

#[test]
fn test_star_italic_dialect() {
    let translator = Translator::new(TranslateOptions {
        italic: ItalicStyle::Star,
        tables: false,
    });
    assert_eq!(
        translator.translate("**b** *i*", OutputFormat::Html.format()),
        "<p><strong>b</strong> <em>i</em></p>"
    );
}

// ============================================================================
// DOCUMENT TESTS
// ============================================================================

#[test]
fn test_kitchensink() {
    let src = "# Title
Intro with **bold** and //soft// text.
* one
* two
```
code
* not a list
```
## Links
See [[Home|/index]] and ![Logo|/logo.png]";

    assert_snapshot!(tmd_to_html(src), @r#"
<h1>Title</h1>
<p>Intro with <strong>bold</strong> and <em>soft</em> text.</p>
<ul>
<li>one</li>
<li>two</li>
</ul>
<pre><code>
code
* not a list
</code></pre>
<h2>Links</h2>
<p>See <a href="/index">Home</a> and <img src="/logo.png" alt="Logo"/></p>
"#);
}
