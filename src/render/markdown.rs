//! Minimal inline markdown transform for the local preview.
//!
//! DESIGN
//! ======
//! This is deliberately not a markdown engine. The preview surface shows a
//! quick local approximation while the server's `format_content` filter stays
//! authoritative for anything actually submitted. Only three rules apply:
//! `**bold**`, `*italic*`, and newline to `<br>`. Delimiter pairs never span
//! lines, so the transform works line by line.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Convert a textarea's raw value into the preview fragment.
///
/// Input with no delimiters passes through unchanged apart from the
/// newline-to-`<br>` substitution.
#[must_use]
pub fn preview_html(input: &str) -> String {
    let lines: Vec<String> = input
        .split('\n')
        .map(|line| {
            let bolded = replace_pairs(line, "**", "<strong>", "</strong>");
            replace_pairs(&bolded, "*", "<em>", "</em>")
        })
        .collect();
    lines.join("<br>")
}

/// Replace non-overlapping `delim ... delim` pairs with `open ... close`.
///
/// An unpaired trailing delimiter is left in place, matching the lazy-pair
/// semantics of the page script this replaces.
fn replace_pairs(line: &str, delim: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find(delim) {
        let after = start + delim.len();
        let Some(end_rel) = rest[after..].find(delim) else {
            break;
        };
        let end = after + end_rel;
        out.push_str(&rest[..start]);
        out.push_str(open);
        out.push_str(&rest[after..end]);
        out.push_str(close);
        rest = &rest[end + delim.len()..];
    }
    out.push_str(rest);
    out
}
