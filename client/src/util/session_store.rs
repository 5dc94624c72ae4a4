//! Persistent key-value storage for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never touch `localStorage` directly. They receive a
//! `SessionStore` so login, registration and profile flows can be exercised
//! against `MemoryStore` in tests and against `BrowserStore` in the browser.
//!
//! TRADE-OFFS
//! ==========
//! Browser persistence is best-effort: a missing or throwing `localStorage`
//! degrades to "no session" instead of failing the screen.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// The closed set of keys shared between screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageKey {
    SessionToken,
    UserEmail,
    UserNickname,
    UserAvatar,
}

impl StorageKey {
    pub const ALL: [StorageKey; 4] = [
        StorageKey::SessionToken,
        StorageKey::UserEmail,
        StorageKey::UserNickname,
        StorageKey::UserAvatar,
    ];

    /// Raw `localStorage` key name.
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::SessionToken => "session_token",
            StorageKey::UserEmail => "user_email",
            StorageKey::UserNickname => "user_nickname",
            StorageKey::UserAvatar => "user_avatar",
        }
    }
}

/// Read/write access to the session keys.
///
/// Methods take `&self`; implementations use interior mutability the same
/// way the browser storage object does.
pub trait SessionStore {
    fn get(&self, key: StorageKey) -> Option<String>;
    fn set(&self, key: StorageKey, value: &str);
    fn remove(&self, key: StorageKey);

    /// Remove every session key.
    fn clear(&self) {
        for key in StorageKey::ALL {
            self.remove(key);
        }
    }
}

/// `window.localStorage`-backed store. Outside the browser every read
/// returns `None` and writes are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key.as_str()).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: StorageKey, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; dropping {}", key.as_str());
                return;
            };
            if storage.set_item(key.as_str(), value).is_err() {
                log::warn!("localStorage rejected write for {}", key.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: StorageKey) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process store with the same semantics as `BrowserStore`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<StorageKey, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently set.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: StorageKey) -> Option<String> {
        self.entries.borrow().get(&key).cloned()
    }

    fn set(&self, key: StorageKey, value: &str) {
        self.entries.borrow_mut().insert(key, value.to_owned());
    }

    fn remove(&self, key: StorageKey) {
        self.entries.borrow_mut().remove(&key);
    }
}
