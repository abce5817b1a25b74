//! Key-value settings store behind the persisted theme preference.
//!
//! DESIGN
//! ======
//! Handlers never talk to `localStorage` directly; they go through a
//! `SettingsStore` chosen once at page start. That keeps the persistence
//! seam injectable: the browser build uses `LocalStore`, native tests use
//! `MemoryStore`.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

/// Minimal get/set capability over string keys and values.
pub trait SettingsStore {
    /// Read a stored value, `None` when absent or the backend is unavailable.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a value. Best-effort: backends that cannot write (storage
    /// disabled, quota) drop the value silently.
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for native tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

/// Browser store over `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(feature = "web")]
impl SettingsStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}
