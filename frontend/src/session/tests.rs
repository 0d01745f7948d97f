use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::*;

/// In-memory backend recording every operation, so tests can assert both the
/// end state and the calling pattern.
#[derive(Default)]
pub(crate) struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    log: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub(crate) fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl SessionBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.log.lock().unwrap().push(format!("set:{}", key));
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.log.lock().unwrap().push(format!("remove:{}", key));
        self.entries.lock().unwrap().remove(key).is_some()
    }
}

// Lets a test keep a handle on the store after handing it to a Session.
impl SessionBackend for Arc<MemoryStore> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.as_ref().set(key, value)
    }

    fn remove(&self, key: &str) -> bool {
        self.as_ref().remove(key)
    }
}

fn test_user() -> UserProfile {
    UserProfile {
        id: Some(1),
        name: "a".into(),
        email: "a@b.com".into(),
        role: "Researcher".into(),
        is_staff: false,
        is_superuser: false,
    }
}

#[test]
fn token_round_trip() {
    let session = Session::new(MemoryStore::default());
    assert_eq!(session.token(), None);
    assert!(!session.has_token());

    session.set_token("abc123");
    assert_eq!(session.token(), Some("abc123".to_string()));
    assert!(session.has_token());
}

#[test]
fn user_round_trip() {
    let session = Session::new(MemoryStore::default());
    assert!(session.user().is_none());

    session.set_user(&test_user());
    let user = session.user().unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.id, Some(1));
}

#[test]
fn corrupt_cached_user_reads_as_absent() {
    let store = MemoryStore::default();
    store.set(USER_KEY, "{not json");
    let session = Session::new(store);
    assert!(session.user().is_none());
}

#[test]
fn clear_removes_both_keys() {
    let session = Session::new(MemoryStore::default());
    session.set_token("abc123");
    session.set_user(&test_user());

    session.clear();
    assert!(!session.has_token());
    assert!(session.user().is_none());
}

#[test]
fn clear_is_idempotent() {
    let session = Session::new(MemoryStore::default());
    session.set_token("abc123");

    session.clear();
    session.clear();
    assert!(!session.has_token());
}

#[test]
fn clear_removes_the_token_first() {
    // The token goes first so nothing ever observes a token without its
    // profile while a logout is in progress.
    let store = Arc::new(MemoryStore::default());
    let session = Session::new(store.clone());
    session.set_token("abc123");
    session.set_user(&test_user());

    session.clear();
    let log = store.log();
    let removals: Vec<_> = log.iter().filter(|op| op.starts_with("remove:")).collect();
    assert_eq!(removals, [&format!("remove:{TOKEN_KEY}"), &format!("remove:{USER_KEY}")]);
}

#[test]
fn presence_check_does_not_validate() {
    // An arbitrary (possibly expired) token still counts as "authenticated"
    // until a request rejects it.
    let session = Session::new(MemoryStore::default());
    session.set_token("expired-but-present");
    assert!(session.has_token());
}
