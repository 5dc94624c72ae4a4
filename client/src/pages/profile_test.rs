use super::*;
use futures::executor::block_on;

use crate::net::error::RequestError;
use crate::net::fake_api::{ScriptedApi, reply};
use crate::util::session_store::{MemoryStore, StorageKey};

fn signed_in_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.set(StorageKey::SessionToken, "tok123");
    store.set(StorageKey::UserEmail, "a@b.com");
    store
}

fn profile_ok() -> Result<crate::net::types::ApiReply, RequestError> {
    reply(true, serde_json::json!({ "success": true, "user": { "email": "a@b.com", "nickname": "neo" } }))
}

fn form(nickname: &str, avatar: Option<AvatarSelection<String>>) -> ProfileForm<String> {
    ProfileForm { nickname: nickname.to_owned(), avatar }
}

fn with_preview(file: &str, preview: &str) -> Option<AvatarSelection<String>> {
    Some(AvatarSelection { file: file.to_owned(), preview_url: Some(preview.to_owned()) })
}

#[test]
fn nickname_outside_bounds_is_rejected_locally() {
    let too_long = "x".repeat(21);
    for nickname in ["", "   ", "ab", too_long.as_str()] {
        let api = ScriptedApi::new();
        let store = signed_in_store();
        let outcome = block_on(submit_profile(&api, &store, false, form(nickname, None)));
        assert_eq!(api.sent_count(), 0, "request sent for {nickname:?}");
        assert!(api.uploaded.borrow().is_empty());
        assert!(outcome.notice.is_destructive());
        assert_eq!(store.get(StorageKey::UserNickname), None);
    }
}

#[test]
fn submit_without_session_redirects_to_login() {
    let api = ScriptedApi::new();
    let outcome = block_on(submit_profile(&api, &MemoryStore::new(), false, form("neo", None)));
    assert_eq!(api.sent_count(), 0);
    assert_eq!(outcome.redirect, Some("/login"));
}

#[test]
fn profile_without_avatar_sends_token_and_persists_nickname() {
    let api = ScriptedApi::new().with_reply(profile_ok());
    let store = signed_in_store();

    let outcome = block_on(submit_profile(&api, &store, false, form("neo", None)));

    let sent = api.sent.borrow();
    assert_eq!(sent[0].0, AuthRequest::UpdateProfile { nickname: "neo".to_owned(), avatar_url: String::new() });
    assert_eq!(sent[0].1.as_deref(), Some("tok123"));
    assert_eq!(store.get(StorageKey::UserNickname).as_deref(), Some("neo"));
    assert_eq!(store.get(StorageKey::UserAvatar), None);
    assert_eq!(outcome.redirect, Some("/"));
}

#[test]
fn profile_without_new_avatar_keeps_previous_url() {
    let api = ScriptedApi::new().with_reply(profile_ok());
    let store = signed_in_store();
    store.set(StorageKey::UserAvatar, "https://cdn/old.png");

    block_on(submit_profile(&api, &store, false, form("neo", None)));

    assert_eq!(
        api.sent.borrow()[0].0,
        AuthRequest::UpdateProfile { nickname: "neo".to_owned(), avatar_url: "https://cdn/old.png".to_owned() }
    );
    assert_eq!(store.get(StorageKey::UserAvatar).as_deref(), Some("https://cdn/old.png"));
}

#[test]
fn uploaded_avatar_url_is_sent_and_stored() {
    let api = ScriptedApi::new()
        .with_upload(Ok("https://cdn/new.png".to_owned()))
        .with_reply(profile_ok());
    let store = signed_in_store();

    block_on(submit_profile(&api, &store, false, form("neo", with_preview("me.png", "data:image/png;base64,AA"))));

    assert_eq!(api.uploaded.borrow().as_slice(), ["me.png"]);
    assert_eq!(
        api.sent.borrow()[0].0,
        AuthRequest::UpdateProfile { nickname: "neo".to_owned(), avatar_url: "https://cdn/new.png".to_owned() }
    );
    assert_eq!(store.get(StorageKey::UserAvatar).as_deref(), Some("https://cdn/new.png"));
}

#[test]
fn upload_failure_is_surfaced_and_profile_not_sent() {
    let api = ScriptedApi::new().with_upload(Err(RequestError::UploadFailed { detail: "500".to_owned() }));
    let store = signed_in_store();

    let outcome = block_on(submit_profile(&api, &store, false, form("neo", with_preview("me.png", "data:x"))));

    assert_eq!(api.sent_count(), 0);
    assert_eq!(outcome.notice.description, "Avatar upload failed");
    assert_eq!(outcome.redirect, None);
    assert_eq!(store.get(StorageKey::UserNickname), None);
}

#[test]
fn upload_failure_with_fallback_sends_preview() {
    let api = ScriptedApi::new()
        .with_upload(Err(RequestError::UploadFailed { detail: "500".to_owned() }))
        .with_reply(profile_ok());
    let store = signed_in_store();

    let outcome = block_on(submit_profile(&api, &store, true, form("neo", with_preview("me.png", "data:x"))));

    assert_eq!(
        api.sent.borrow()[0].0,
        AuthRequest::UpdateProfile { nickname: "neo".to_owned(), avatar_url: "data:x".to_owned() }
    );
    assert_eq!(store.get(StorageKey::UserAvatar).as_deref(), Some("data:x"));
    assert_eq!(outcome.redirect, Some("/"));
}

#[test]
fn upload_failure_with_fallback_but_no_preview_still_fails() {
    let api = ScriptedApi::new().with_upload(Err(RequestError::UploadFailed { detail: "500".to_owned() }));
    let avatar = Some(AvatarSelection::new("me.png".to_owned()));

    let outcome = block_on(submit_profile(&api, &signed_in_store(), true, form("neo", avatar)));

    assert_eq!(api.sent_count(), 0);
    assert!(outcome.notice.is_destructive());
}

#[test]
fn rejected_update_leaves_profile_unchanged() {
    let api = ScriptedApi::new().with_reply(reply(false, serde_json::json!({ "error": "Unauthorized" })));
    let store = signed_in_store();

    let outcome = block_on(submit_profile(&api, &store, false, form("neo", None)));

    assert_eq!(store.get(StorageKey::UserNickname), None);
    assert_eq!(outcome.notice.title, "Error");
    assert_eq!(outcome.notice.description, "Unauthorized");
}
