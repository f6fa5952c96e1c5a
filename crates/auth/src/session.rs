//! Cookie-backed session token holder.
//!
//! Persistence is behind the [`TokenStore`] trait so this crate stays free of
//! browser APIs: the console provides a `document.cookie` store, tests use
//! [`MemoryTokenStore`].

use std::cell::RefCell;
use std::rc::Rc;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "warden_session";

/// Cookie lifetime: one day.
pub const SESSION_TTL_SECS: u64 = 86_400;

/// Persistence seam for the bearer token.
pub trait TokenStore {
    /// Persist the token. No error conditions: a failed cookie write degrades
    /// to an in-memory session.
    fn save(&self, token: &str);

    /// Read the persisted token, if any. An absent token is not an error.
    fn load(&self) -> Option<String>;

    /// Remove the persisted token. Idempotent.
    fn clear(&self);
}

/// In-memory token store for tests and native tooling.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_string());
    }

    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Shared handle to the current session token.
///
/// Cloning yields another handle to the same session; the gateway and the
/// auth context hold clones of one session so that a 401 observed by either
/// is visible to both.
#[derive(Clone)]
pub struct Session {
    token: Rc<RefCell<Option<String>>>,
    store: Rc<dyn TokenStore>,
}

impl Session {
    /// Create a session, loading any persisted token from the store.
    pub fn new(store: Rc<dyn TokenStore>) -> Self {
        let token = store.load();
        Self {
            token: Rc::new(RefCell::new(token)),
            store,
        }
    }

    /// In-memory session with no persistence, for tests.
    pub fn ephemeral() -> Self {
        Self::new(Rc::new(MemoryTokenStore::new()))
    }

    /// Persist a freshly issued token.
    pub fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
        self.store.save(token);
    }

    /// Drop the token from memory and from the store. Idempotent.
    pub fn clear(&self) {
        *self.token.borrow_mut() = None;
        self.store.clear();
    }

    /// Current token, if one is held.
    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_present(&self) -> bool {
        self.token.borrow().is_some()
    }
}
