use super::*;
use crate::util::session_store::MemoryStore;

// =============================================================
// Session
// =============================================================

#[test]
fn session_persist_then_load() {
    let store = MemoryStore::new();
    let session = Session { token: "tok123".to_owned(), email: "a@b.com".to_owned() };
    session.persist(&store);
    assert_eq!(store.get(StorageKey::SessionToken).as_deref(), Some("tok123"));
    assert_eq!(store.get(StorageKey::UserEmail).as_deref(), Some("a@b.com"));
    assert_eq!(Session::load(&store), Some(session));
}

#[test]
fn session_load_treats_empty_token_as_absent() {
    let store = MemoryStore::new();
    store.set(StorageKey::SessionToken, "");
    store.set(StorageKey::UserEmail, "a@b.com");
    assert_eq!(Session::load(&store), None);
}

#[test]
fn session_persist_overwrites_previous_login() {
    let store = MemoryStore::new();
    Session { token: "old".to_owned(), email: "old@b.com".to_owned() }.persist(&store);
    Session { token: "new".to_owned(), email: "new@b.com".to_owned() }.persist(&store);
    assert_eq!(Session::load(&store).map(|s| s.token).as_deref(), Some("new"));
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_persist_none_avatar_removes_key() {
    let store = MemoryStore::new();
    store.set(StorageKey::UserAvatar, "https://cdn/old.png");
    Profile { nickname: Some("neo".to_owned()), avatar_url: None }.persist(&store);
    assert_eq!(store.get(StorageKey::UserNickname).as_deref(), Some("neo"));
    assert_eq!(store.get(StorageKey::UserAvatar), None);
}

#[test]
fn profile_load_ignores_empty_values() {
    let store = MemoryStore::new();
    store.set(StorageKey::UserNickname, "");
    store.set(StorageKey::UserAvatar, "");
    assert_eq!(Profile::load(&store), Profile::default());
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_state_display_name_prefers_nickname() {
    let store = MemoryStore::new();
    Session { token: "t".to_owned(), email: "a@b.com".to_owned() }.persist(&store);
    assert_eq!(SessionState::load(&store).display_name().as_deref(), Some("a@b.com"));

    store.set(StorageKey::UserNickname, "neo");
    let state = SessionState::load(&store);
    assert!(state.is_signed_in());
    assert_eq!(state.display_name().as_deref(), Some("neo"));
}

#[test]
fn session_state_default_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert_eq!(state.display_name(), None);
}

#[test]
fn sign_out_clears_all_keys() {
    let store = MemoryStore::new();
    Session { token: "t".to_owned(), email: "a@b.com".to_owned() }.persist(&store);
    Profile { nickname: Some("neo".to_owned()), avatar_url: Some("u".to_owned()) }.persist(&store);
    sign_out(&store);
    assert!(store.is_empty());
    assert_eq!(SessionState::load(&store), SessionState::default());
}
