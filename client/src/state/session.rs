//! Session and profile state persisted through a `SessionStore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login and registration write the session, the profile screen writes the
//! profile, and the landing header reads both. `SessionState` is the reactive
//! snapshot provided via context; the store stays the source of truth.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::session_store::{SessionStore, StorageKey};

/// Credential issued by the auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
}

impl Session {
    /// Load the stored session. An empty token counts as no session.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Option<Self> {
        let token = store.get(StorageKey::SessionToken).filter(|t| !t.is_empty())?;
        let email = store.get(StorageKey::UserEmail).unwrap_or_default();
        Some(Self { token, email })
    }

    /// Overwrite the stored token and email.
    pub fn persist<S: SessionStore + ?Sized>(&self, store: &S) {
        store.set(StorageKey::SessionToken, &self.token);
        store.set(StorageKey::UserEmail, &self.email);
    }
}

/// Locally remembered profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub nickname: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self {
            nickname: store.get(StorageKey::UserNickname).filter(|n| !n.is_empty()),
            avatar_url: store.get(StorageKey::UserAvatar).filter(|u| !u.is_empty()),
        }
    }

    /// Write both fields; `None` removes the key.
    pub fn persist<S: SessionStore + ?Sized>(&self, store: &S) {
        match &self.nickname {
            Some(nickname) => store.set(StorageKey::UserNickname, nickname),
            None => store.remove(StorageKey::UserNickname),
        }
        match &self.avatar_url {
            Some(url) => store.set(StorageKey::UserAvatar, url),
            None => store.remove(StorageKey::UserAvatar),
        }
    }
}

/// Reactive snapshot of the stored session for rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub profile: Profile,
}

impl SessionState {
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Self {
        Self { session: Session::load(store), profile: Profile::load(store) }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Nickname if set, else the session email.
    pub fn display_name(&self) -> Option<String> {
        self.profile
            .nickname
            .clone()
            .or_else(|| self.session.as_ref().map(|s| s.email.clone()))
    }
}

/// Forget the session and profile.
pub fn sign_out<S: SessionStore + ?Sized>(store: &S) {
    store.clear();
    log::info!("session cleared");
}
