//! Theme preference logic over an injected [`SettingsStore`].
//!
//! The flag is read once at page load and written back on every toggle. The
//! storage key predates this crate, so it is kept as-is for browsers that
//! already hold a preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::settings::SettingsStore;

/// Storage key carried over from the original page script.
pub const STORAGE_KEY: &str = "darkMode";

/// Read the persisted dark-mode preference.
///
/// Anything other than a stored `"true"` counts as light mode, matching how
/// the value has historically been written.
#[must_use]
pub fn read_preference(store: &dyn SettingsStore) -> bool {
    store.get(STORAGE_KEY).as_deref() == Some("true")
}

/// Flip the preference and persist the new value immediately.
#[must_use = "the caller owns the current flag and must keep the new value"]
pub fn toggle(store: &dyn SettingsStore, current: bool) -> bool {
    let next = !current;
    store.set(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
