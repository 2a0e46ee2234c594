use tmd_babel::{FormatRegistry, TranslateOptions};

fn tmd_to_md(src: &str) -> String {
    let options = TranslateOptions {
        tables: true,
        ..TranslateOptions::default()
    };
    FormatRegistry::default()
        .translate(src, "markdown", &options)
        .expect("markdown is registered")
}

#[test]
fn test_rows_are_padded_with_separators() {
    assert_eq!(
        tmd_to_md("Name|Age\n|Ada  |  36|"),
        "| Name | Age |\n| Ada | 36 |"
    );
}

#[test]
fn test_inner_empty_cells_keep_their_position() {
    assert_eq!(tmd_to_md("| a | | c |"), "| a |  | c |");
}

#[test]
fn test_tables_have_no_wrapper_lines() {
    assert_eq!(tmd_to_md("a | b\ntext\nc | d"), "| a | b |\ntext\n| c | d |");
}

#[test]
fn test_lone_separator_stays_a_lone_separator() {
    assert_eq!(tmd_to_md("|"), "|");
}
