//! Comment-endpoint URL helpers.
//!
//! A comment form's action encodes the target post as its final path segment
//! (`/comment/new/{post_id}`). The DOM may report the action as an absolute
//! URL, so extraction works on either form.

#[cfg(test)]
#[path = "urls_test.rs"]
mod urls_test;

/// Path prefix identifying a comment form's action.
pub const COMMENT_ACTION_PREFIX: &str = "/comment/new/";

/// Extract the post id from a comment form action. `None` when the action
/// ends in a separator or is empty.
#[must_use]
pub fn post_id_from_action(action: &str) -> Option<&str> {
    let last = action.rsplit('/').next()?;
    if last.is_empty() { None } else { Some(last) }
}
