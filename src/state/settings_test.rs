use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn missing_key_reads_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get("darkMode"), None);
}

#[test]
fn set_then_get_round_trips() {
    let store = MemoryStore::default();
    store.set("darkMode", "true");
    assert_eq!(store.get("darkMode"), Some("true".to_owned()));
}

#[test]
fn set_overwrites_previous_value() {
    let store = MemoryStore::default();
    store.set("darkMode", "true");
    store.set("darkMode", "false");
    assert_eq!(store.get("darkMode"), Some("false".to_owned()));
}

#[test]
fn keys_are_independent() {
    let store = MemoryStore::default();
    store.set("darkMode", "true");
    assert_eq!(store.get("other"), None);
}
