//! HTML fragment for a freshly submitted comment.
//!
//! The body (`formatted_content`) arrives pre-sanitized from the server and
//! is inserted as-is; the client never re-renders it. Author fields are plain
//! text from our perspective, so they are escaped before interpolation.

#[cfg(test)]
#[path = "comment_test.rs"]
mod comment_test;

use crate::net::types::RenderedComment;

/// CSS classes for the wrapper element a new comment is inserted as.
pub const COMMENT_CLASS: &str = "comment p-2 mb-2 bg-light rounded";

/// Inner markup for a comment element: author link and relative timestamp on
/// one row, the server-rendered body below.
#[must_use]
pub fn comment_inner_html(comment: &RenderedComment) -> String {
    format!(
        concat!(
            "<div class=\"d-flex justify-content-between mb-1\">",
            "<div><a href=\"{url}\">{name}</a></div>",
            "<div class=\"text-muted small\">{when}</div>",
            "</div>",
            "<div>{body}</div>",
        ),
        url = escape_html(&comment.author.profile_url),
        name = escape_html(&comment.author.username),
        when = escape_html(&comment.time_since),
        body = comment.formatted_content,
    )
}

/// Markup for the comments container created alongside the first comment.
pub const COMMENTS_HEADER_HTML: &str = "<h6>Comments:</h6>";

/// Escape text for safe interpolation into markup.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
