//! # Session store
//!
//! The client's single source of truth for who is logged in.
//!
//! [`SessionStore`] owns the persisted token slot and publishes the current
//! [`Session`] over a [`tokio::sync::watch`] channel. The transport reads the
//! token from here on every call, and the UI subscribes to re-render when
//! it changes.
//!
//! The session is only ever replaced wholesale, so readers never observe a
//! token without its matching identity.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use store::KeyValueStore;
use tokio::sync::watch;

use super::token::decode_identity;
use crate::models::Identity;

/// Default key of the persisted token slot.
pub const SESSION_TOKEN_KEY: &str = "appToken";

/// The client's belief about who is authenticated.
///
/// `identity` is present iff `token` is present and decodable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub identity: Option<Identity>,
}

impl Session {
    /// Session for `token`, decoding the identity from its claims.
    pub fn from_token(token: String) -> Self {
        let identity = decode_identity(&token);
        Self {
            token: Some(token),
            identity,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

struct Inner {
    slot: Arc<dyn KeyValueStore>,
    key: String,
    state: watch::Sender<Session>,
    initialized: AtomicBool,
}

/// Shared handle to the session. Clones observe the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.inner.key)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    /// Create an empty, uninitialized store over the default token slot.
    pub fn new(slot: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(slot, SESSION_TOKEN_KEY)
    }

    /// Create an empty, uninitialized store over a named token slot.
    pub fn with_key(slot: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            inner: Arc::new(Inner {
                slot,
                key: key.into(),
                state,
                initialized: AtomicBool::new(false),
            }),
        }
    }

    /// Hydrate the session from the persisted slot.
    ///
    /// Only the first call reads storage; later calls return the current
    /// session untouched.
    pub fn initialize(&self) -> Session {
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            return self.snapshot();
        }
        let session = match self.inner.slot.get(&self.inner.key) {
            Some(token) => Session::from_token(token),
            None => Session::default(),
        };
        tracing::debug!(
            "Session initialized (authenticated: {})",
            session.is_authenticated()
        );
        self.inner.state.send_replace(session.clone());
        session
    }

    /// Persist `token` and publish the session derived from it.
    pub fn establish(&self, token: impl Into<String>) -> Session {
        let token = token.into();
        if let Err(e) = self.inner.slot.set(&self.inner.key, &token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
        let session = Session::from_token(token);
        if !session.is_authenticated() {
            tracing::warn!("Established a token that carries no readable identity");
        }
        self.inner.state.send_replace(session.clone());
        session
    }

    /// Remove the persisted token and publish an empty session.
    pub fn clear(&self) {
        if let Err(e) = self.inner.slot.remove(&self.inner.key) {
            tracing::warn!("Failed to remove persisted session token: {}", e);
        }
        self.inner.state.send_replace(Session::default());
    }

    /// The latest session.
    pub fn snapshot(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    /// The latest bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token.clone()
    }

    pub fn identity(&self) -> Option<Identity> {
        self.inner.state.borrow().identity.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.state.borrow().is_authenticated()
    }

    /// Receiver notified after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::unsigned_token;
    use serde_json::json;
    use store::MemoryStore;

    fn alice_token() -> String {
        unsigned_token(json!({
            "sub": "alice@example.com",
            "user_id": "42",
            "full_name": "Alice",
        }))
    }

    #[test]
    fn test_initialize_from_persisted_token() {
        let slot = MemoryStore::with_value(SESSION_TOKEN_KEY, &alice_token());
        let session = SessionStore::new(Arc::new(slot));
        assert!(!session.is_authenticated());

        let hydrated = session.initialize();
        assert!(hydrated.is_authenticated());
        assert_eq!(session.identity().unwrap().full_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_initialize_runs_once() {
        let slot = MemoryStore::new();
        let session = SessionStore::new(Arc::new(slot.clone()));
        session.initialize();

        // A token written behind the store's back after startup is not picked up.
        slot.set(SESSION_TOKEN_KEY, &alice_token()).unwrap();
        assert!(!session.initialize().is_authenticated());
    }

    #[test]
    fn test_establish_persists_and_publishes() {
        let slot = MemoryStore::new();
        let session = SessionStore::new(Arc::new(slot.clone()));
        session.initialize();

        let token = alice_token();
        let established = session.establish(token.clone());
        assert!(established.is_authenticated());
        assert_eq!(slot.get(SESSION_TOKEN_KEY), Some(token.clone()));
        assert_eq!(session.token(), Some(token));
        assert_eq!(session.identity().unwrap().full_name.as_deref(), Some("Alice"));
    }

    #[test]
    fn test_authenticated_iff_subject_decodes() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));

        session.establish(unsigned_token(json!({ "sub": "x@y.z" })));
        assert!(session.is_authenticated());

        session.establish(unsigned_token(json!({ "user_id": "1" })));
        assert!(!session.is_authenticated());
        // The token is still held and sent; the backend decides.
        assert!(session.token().is_some());

        session.establish("garbage");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clear_from_any_state() {
        let slot = MemoryStore::with_value(SESSION_TOKEN_KEY, &alice_token());
        let session = SessionStore::new(Arc::new(slot.clone()));

        // Before initialize
        session.clear();
        assert!(!session.is_authenticated());
        assert!(slot.get(SESSION_TOKEN_KEY).is_none());

        // After establish
        session.establish(alice_token());
        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
        assert!(slot.get(SESSION_TOKEN_KEY).is_none());

        // Already clear
        session.clear();
        assert_eq!(session.snapshot(), Session::default());
    }

    #[test]
    fn test_clones_share_state_and_notify_subscribers() {
        let session = SessionStore::new(Arc::new(MemoryStore::new()));
        let handle = session.clone();
        let mut rx = session.subscribe();

        handle.establish(alice_token());
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());
        assert!(session.is_authenticated());

        handle.clear();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }

    #[test]
    fn test_custom_slot_key() {
        let slot = MemoryStore::new();
        let session = SessionStore::with_key(Arc::new(slot.clone()), "patientToken");
        session.establish(alice_token());
        assert!(slot.get("patientToken").is_some());
        assert!(slot.get(SESSION_TOKEN_KEY).is_none());
    }
}
