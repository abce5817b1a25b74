use super::*;

#[test]
fn relative_action_yields_final_segment() {
    assert_eq!(post_id_from_action("/comment/new/42"), Some("42"));
}

#[test]
fn absolute_action_yields_final_segment() {
    assert_eq!(
        post_id_from_action("https://forum.example/comment/new/42"),
        Some("42")
    );
}

#[test]
fn trailing_slash_yields_none() {
    assert_eq!(post_id_from_action("/comment/new/"), None);
}

#[test]
fn empty_action_yields_none() {
    assert_eq!(post_id_from_action(""), None);
}

#[test]
fn segment_without_slashes_is_returned_whole() {
    assert_eq!(post_id_from_action("42"), Some("42"));
}
