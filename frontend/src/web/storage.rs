//! LocalStorage wrapper.
//!
//! Thin wrapper over `web_sys::Storage` so callers never touch the raw API.

/// Static accessors for the browser's LocalStorage.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Returns the stored value, or `None` if the key is absent or storage is
    /// unavailable.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Stores a value. Returns `false` if storage is unavailable or full.
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// Removes a key. Returns `false` if storage is unavailable.
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
