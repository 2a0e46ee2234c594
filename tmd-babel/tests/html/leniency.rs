//! Malformed input is rendered best-effort, never rejected.

use tmd_babel::{translate, OutputFormat};

#[test]
fn test_unterminated_list_is_closed() {
    assert_eq!(
        translate("* one\n* two", OutputFormat::Html),
        "<ul>\n<li>one</li>\n<li>two</li>\n</ul>"
    );
}

#[test]
fn test_unterminated_fence_swallows_the_rest() {
    let html = translate("intro\n```\n# heading?\n* item?", OutputFormat::Html);
    assert_eq!(
        html,
        "<p>intro</p>\n<pre><code>\n# heading?\n* item?\n</code></pre>"
    );
}

#[test]
fn test_lone_fence() {
    assert_eq!(
        translate("```", OutputFormat::Html),
        "<pre><code>\n</code></pre>"
    );
}

#[test]
fn test_fence_after_list_closes_list_first() {
    assert_eq!(
        translate("* a\n```\nx\n```", OutputFormat::Html),
        "<ul>\n<li>a</li>\n</ul>\n<pre><code>\nx\n</code></pre>"
    );
}

#[test]
fn test_unpaired_inline_markers() {
    assert_eq!(
        translate("**open [[half ![x", OutputFormat::Html),
        "<p>**open [[half ![x</p>"
    );
}
