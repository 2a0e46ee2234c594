use tmd_babel::{FormatRegistry, TranslateOptions};

fn tmd_to_html(src: &str) -> String {
    let options = TranslateOptions {
        tables: true,
        ..TranslateOptions::default()
    };
    FormatRegistry::default()
        .translate(src, "html", &options)
        .expect("html is registered")
}

#[test]
fn test_table_html_export() {
    let html = tmd_to_html("| Name | Age |\n| Ada | 36 |");
    assert_eq!(
        html,
        "<table>\n<tr><td>Name</td><td>Age</td></tr>\n<tr><td>Ada</td><td>36</td></tr>\n</table>"
    );
}

#[test]
fn test_separate_runs_make_separate_tables() {
    let html = tmd_to_html("a | b\nc | d\nbetween\ne | f");
    assert_eq!(html.matches("<table>").count(), 2);
    assert_eq!(html.matches("</table>").count(), 2);
    assert_eq!(html.matches("<tr>").count(), 3);
    assert!(html.contains("</table>\n<p>between</p>\n<table>"));
}

#[test]
fn test_table_closed_at_end_of_input() {
    assert!(tmd_to_html("a | b").ends_with("</tr>\n</table>"));
}

#[test]
fn test_outer_empty_cells_dropped() {
    assert_eq!(
        tmd_to_html("|a||c|"),
        "<table>\n<tr><td>a</td><td></td><td>c</td></tr>\n</table>"
    );
}

#[test]
fn test_pipe_inside_code_block_is_not_a_row() {
    assert_eq!(
        tmd_to_html("```\na | b\n```"),
        "<pre><code>\na | b\n</code></pre>"
    );
}

#[test]
fn test_pipe_in_prose_becomes_a_row() {
    // Any line containing the separator is a row once tables are on.
    assert!(tmd_to_html("either this | or that").starts_with("<table>"));
}

#[test]
fn test_lone_separator_is_an_empty_row() {
    assert_eq!(tmd_to_html("|"), "<table>\n<tr></tr>\n</table>");
}
