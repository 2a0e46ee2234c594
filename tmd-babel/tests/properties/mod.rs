//! Properties that hold for every input.

use proptest::prelude::*;
use tmd_babel::{translate, OutputFormat};

/// Lines drawn from the TMD grammar, without any `<` so that every tag in the output comes
/// from the translator.
fn tmd_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("```".to_string()),
        Just("* item".to_string()),
        Just("# one".to_string()),
        Just("## two".to_string()),
        Just("### three".to_string()),
        Just("a | b".to_string()),
        Just(String::new()),
        "[a-z *|/!\\[\\]#`]{0,16}",
    ]
}

fn tmd_document() -> impl Strategy<Value = String> {
    prop::collection::vec(tmd_line(), 0..24).prop_map(|lines| lines.join("\n"))
}

/// Walk the output lines, checking that `open`/`close` lines nest properly and end balanced.
fn balanced(output: &str, open: &str, close: &str) -> bool {
    let mut depth = 0i32;
    for line in output.lines() {
        if line == open {
            depth += 1;
            if depth > 1 {
                return false;
            }
        } else if line == close {
            depth -= 1;
            if depth < 0 {
                return false;
            }
        }
    }
    depth == 0
}

proptest! {
    #[test]
    fn translate_never_panics(text in any::<String>()) {
        let _ = translate(&text, OutputFormat::Html);
        let _ = translate(&text, OutputFormat::Markdown);
    }

    #[test]
    fn html_output_is_balanced(doc in tmd_document()) {
        let html = translate(&doc, OutputFormat::Html);
        prop_assert!(balanced(&html, "<ul>", "</ul>"), "unbalanced list in {html:?}");
        prop_assert!(
            balanced(&html, "<pre><code>", "</code></pre>"),
            "unbalanced code block in {html:?}"
        );
    }

    #[test]
    fn html_tables_are_balanced(doc in tmd_document()) {
        let options = tmd_babel::TranslateOptions { tables: true, ..Default::default() };
        let html = tmd_babel::Translator::new(options)
            .translate(&doc, OutputFormat::Html.format());
        prop_assert!(balanced(&html, "<table>", "</table>"), "unbalanced table in {html:?}");
        prop_assert!(balanced(&html, "<ul>", "</ul>"), "unbalanced list in {html:?}");
    }

    #[test]
    fn markdown_keeps_line_count_without_grouping(doc in "[a-z #/*!\\[\\]]{0,40}(\n[a-z #/*!\\[\\]]{0,40}){0,10}") {
        // Without fences, every input line maps to exactly one output line.
        let md = translate(&doc, OutputFormat::Markdown);
        prop_assert_eq!(md.split('\n').count(), doc.split('\n').count());
    }
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(translate("", OutputFormat::Html), "");
    assert_eq!(translate("", OutputFormat::Markdown), "");
}
