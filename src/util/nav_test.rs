use super::*;

#[test]
fn exact_path_matches() {
    assert!(is_active(Some("/topics"), "/topics"));
}

#[test]
fn different_path_does_not_match() {
    assert!(!is_active(Some("/topics"), "/messages"));
}

#[test]
fn prefix_is_not_enough() {
    assert!(!is_active(Some("/topics"), "/topics/42"));
}

#[test]
fn trailing_slash_is_a_different_path() {
    assert!(!is_active(Some("/topics/"), "/topics"));
}

#[test]
fn missing_href_never_matches() {
    assert!(!is_active(None, "/topics"));
}

#[test]
fn root_path_matches_root_link() {
    assert!(is_active(Some("/"), "/"));
}
