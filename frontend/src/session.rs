//! Durable session storage.
//!
//! The client-held session record: the auth token plus a cached copy of the
//! profile it belongs to. Storage goes through the injectable
//! [`SessionBackend`] seam instead of an ambient global, so the auth layer is
//! mockable and the browser dependency stays in one impl.

use std::sync::Arc;

use thrive_shared::UserProfile;

use crate::web::LocalStorage;

/// Storage key for the auth token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the cached profile.
pub const USER_KEY: &str = "user";

/// Key-value seam under the session.
pub trait SessionBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str) -> bool;
}

/// Production backend on the browser's LocalStorage.
pub struct BrowserStore;

impl SessionBackend for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        LocalStorage::delete(key)
    }
}

/// Cheap-clone handle to the session record.
#[derive(Clone)]
pub struct Session {
    backend: Arc<dyn SessionBackend>,
}

impl Session {
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// Presence check only. Validity is established by the one-shot mount
    /// validation, and a stale token falls at its first rejected request.
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// The cached profile. Only meaningful while a token is present; an
    /// unreadable cache entry reads as absent.
    pub fn user(&self) -> Option<UserProfile> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_user(&self, user: &UserProfile) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &raw);
        }
    }

    /// Removes the token and the cached profile unconditionally. Idempotent;
    /// callers run this before any navigation so a guarded route never sees a
    /// half-cleared session.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests;
