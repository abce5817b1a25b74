use super::*;

fn full_payload() -> serde_json::Value {
    serde_json::json!({
        "id": 42,
        "content": "nice post",
        "created_at": "2026-08-23 10:15:00",
        "time_since": "just now",
        "author": {
            "id": 3,
            "username": "alice",
            "profile_url": "/profile/alice"
        },
        "formatted_content": "nice post"
    })
}

// =============================================================
// RenderedComment deserialization
// =============================================================

#[test]
fn full_payload_parses() {
    let comment: RenderedComment = serde_json::from_value(full_payload()).unwrap();
    assert_eq!(comment.id, 42);
    assert_eq!(comment.time_since, "just now");
    assert_eq!(comment.author.username, "alice");
    assert_eq!(comment.author.profile_url, "/profile/alice");
    assert_eq!(comment.formatted_content, "nice post");
}

#[test]
fn missing_formatted_content_is_an_error() {
    let mut payload = full_payload();
    payload.as_object_mut().unwrap().remove("formatted_content");
    assert!(serde_json::from_value::<RenderedComment>(payload).is_err());
}

#[test]
fn missing_author_field_is_an_error() {
    let mut payload = full_payload();
    payload["author"].as_object_mut().unwrap().remove("profile_url");
    assert!(serde_json::from_value::<RenderedComment>(payload).is_err());
}

#[test]
fn unknown_fields_are_ignored() {
    let mut payload = full_payload();
    payload
        .as_object_mut()
        .unwrap()
        .insert("extra".to_owned(), serde_json::json!(true));
    assert!(serde_json::from_value::<RenderedComment>(payload).is_ok());
}

#[test]
fn round_trips_through_json() {
    let comment: RenderedComment = serde_json::from_value(full_payload()).unwrap();
    let text = serde_json::to_string(&comment).unwrap();
    let back: RenderedComment = serde_json::from_str(&text).unwrap();
    assert_eq!(back, comment);
}
