//! Export tests for the Markdown format

use insta::assert_snapshot;
use tmd_babel::{translate, OutputFormat};

fn tmd_to_md(src: &str) -> String {
    translate(src, OutputFormat::Markdown)
}

#[test]
fn test_heading_prefix_is_normalized() {
    assert_eq!(tmd_to_md("#     Title   "), "# Title");
    assert_eq!(tmd_to_md("##  Sub"), "## Sub");
    assert_eq!(tmd_to_md("###\tDeep"), "###\tDeep");
    assert_eq!(tmd_to_md("### \t Deep"), "### Deep");
}

#[test]
fn test_plain_lines_are_kept() {
    assert_eq!(tmd_to_md("a\n\n  b  "), "a\n\n  b  ");
}

#[test]
fn test_list_items_use_dashes() {
    assert_eq!(tmd_to_md("* one\n  * two\nafter"), "- one\n- two\nafter");
}

#[test]
fn test_inline_spans() {
    assert_eq!(
        tmd_to_md("**b** //i// [[Home|/index]] ![Logo|/logo.png]"),
        "**b** *i* [Home](/index) ![Logo](/logo.png)"
    );
}

#[test]
fn test_code_block_is_verbatim() {
    assert_eq!(
        tmd_to_md("```\n//not italic//\n```"),
        "```\n//not italic//\n```"
    );
}

#[test]
fn test_unterminated_fence_is_closed() {
    assert_eq!(tmd_to_md("```\ncode"), "```\ncode\n```");
}

#[test]
fn test_trailing_newline_is_preserved() {
    assert_eq!(tmd_to_md("# Title\n"), "# Title\n");
}

#[test]
fn test_kitchensink() {
    let src = "#  Title
Intro with **bold** and //soft// text.
* one
* two
```
  code //kept//
```
## Links
See [[Home|/index]] and ![Logo|/logo.png]";

    assert_snapshot!(tmd_to_md(src), @r"
# Title
Intro with **bold** and *soft* text.
- one
- two
```
  code //kept//
```
## Links
See [Home](/index) and ![Logo](/logo.png)
");
}
