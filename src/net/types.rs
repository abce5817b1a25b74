//! Wire DTOs for the comment-submission endpoint.
//!
//! DESIGN
//! ======
//! Every field the page needs is required, so a response missing any of them
//! fails deserialization and the whole submission is treated as failed rather
//! than rendering empty fragments.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Author projection attached to a rendered comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    /// Server-side user id.
    pub id: i64,
    /// Display name.
    pub username: String,
    /// Address of the author's profile page.
    pub profile_url: String,
}

/// A comment as returned by `POST /comment/new/{post_id}` for programmatic
/// requests. The server renders `formatted_content` to safe markup; the
/// client displays it verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedComment {
    /// Server-side comment id.
    pub id: i64,
    /// Raw comment text as stored.
    pub content: String,
    /// Absolute creation timestamp, server-formatted.
    pub created_at: String,
    /// Human-readable relative timestamp ("2 minutes ago").
    pub time_since: String,
    pub author: CommentAuthor,
    /// Pre-sanitized renderable body.
    pub formatted_content: String,
}
