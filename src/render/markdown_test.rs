use super::*;

// =============================================================
// Combined transform
// =============================================================

#[test]
fn bold_italic_and_line_break_together() {
    assert_eq!(
        preview_html("**bold** and *italic*\nNext line"),
        "<strong>bold</strong> and <em>italic</em><br>Next line"
    );
}

#[test]
fn plain_text_passes_through() {
    assert_eq!(preview_html("no delimiters here"), "no delimiters here");
}

#[test]
fn plain_multiline_only_gains_breaks() {
    assert_eq!(preview_html("one\ntwo\nthree"), "one<br>two<br>three");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(preview_html(""), "");
}

// =============================================================
// Bold
// =============================================================

#[test]
fn bold_pair_converts() {
    assert_eq!(preview_html("**x**"), "<strong>x</strong>");
}

#[test]
fn multiple_bold_pairs_on_one_line() {
    assert_eq!(
        preview_html("**a** mid **b**"),
        "<strong>a</strong> mid <strong>b</strong>"
    );
}

#[test]
fn unpaired_double_delimiter_collapses_to_empty_italic() {
    // A `**` with no closing pair falls through to the italic pass, which
    // sees two adjacent single delimiters. Same output as the page script.
    assert_eq!(preview_html("**open only"), "<em></em>open only");
}

#[test]
fn bold_never_spans_lines() {
    assert_eq!(preview_html("**a\nb**"), "<em></em>a<br>b<em></em>");
}

// =============================================================
// Italic
// =============================================================

#[test]
fn italic_pair_converts() {
    assert_eq!(preview_html("*x*"), "<em>x</em>");
}

#[test]
fn unpaired_italic_delimiter_is_kept() {
    assert_eq!(preview_html("5 * 3"), "5 * 3");
}

#[test]
fn bold_takes_precedence_over_italic() {
    // The double delimiter is consumed first; the leftover single stars
    // still pair up as italics.
    assert_eq!(
        preview_html("**b** then *i*"),
        "<strong>b</strong> then <em>i</em>"
    );
}
