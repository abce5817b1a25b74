//! Active-nav matching.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether a nav link pointing at `href` should be marked active for the
/// page at `current_path`. Exact match only; links without an `href`
/// attribute never match.
#[must_use]
pub fn is_active(href: Option<&str>, current_path: &str) -> bool {
    href == Some(current_path)
}
