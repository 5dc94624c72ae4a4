use super::*;
use crate::net::fake_api::reply;

#[test]
fn upload_failed_message_formats_status() {
    assert_eq!(upload_failed_message(413), "avatar upload failed: 413");
}

#[test]
fn session_reply_success_yields_session() {
    let ok = reply(
        true,
        serde_json::json!({ "success": true, "session_token": "tok123", "user": { "email": "a@b.com" } }),
    )
    .unwrap();
    assert_eq!(
        interpret_session_reply(ApiAction::Login, ok),
        Ok(Session { token: "tok123".to_owned(), email: "a@b.com".to_owned() })
    );
}

#[test]
fn session_reply_error_body_is_rejected_with_server_text() {
    let bad = reply(false, serde_json::json!({ "error": "Invalid email or password" })).unwrap();
    assert_eq!(
        interpret_session_reply(ApiAction::Login, bad),
        Err(RequestError::Rejected { action: ApiAction::Login, message: Some("Invalid email or password".to_owned()) })
    );
}

#[test]
fn session_reply_ok_status_without_success_flag_is_rejected() {
    let odd = reply(true, serde_json::json!({})).unwrap();
    assert_eq!(
        interpret_session_reply(ApiAction::Register, odd),
        Err(RequestError::Rejected { action: ApiAction::Register, message: None })
    );
}

#[test]
fn session_reply_success_flag_with_error_status_is_rejected() {
    let odd = reply(false, serde_json::json!({ "success": true, "session_token": "t", "user": { "email": "a@b.com" } }))
        .unwrap();
    assert!(matches!(interpret_session_reply(ApiAction::Login, odd), Err(RequestError::Rejected { .. })));
}

#[test]
fn session_reply_missing_token_or_user_is_malformed() {
    let no_token = reply(true, serde_json::json!({ "success": true, "user": { "email": "a@b.com" } })).unwrap();
    let no_user = reply(true, serde_json::json!({ "success": true, "session_token": "tok" })).unwrap();
    assert!(matches!(interpret_session_reply(ApiAction::Login, no_token), Err(RequestError::Malformed { .. })));
    assert!(matches!(interpret_session_reply(ApiAction::Login, no_user), Err(RequestError::Malformed { .. })));
}

#[test]
fn profile_reply_success_and_failure() {
    let ok = reply(true, serde_json::json!({ "success": true })).unwrap();
    let bad = reply(false, serde_json::json!({ "error": "Unauthorized" })).unwrap();
    assert_eq!(interpret_profile_reply(ok), Ok(()));
    assert_eq!(
        interpret_profile_reply(bad),
        Err(RequestError::Rejected { action: ApiAction::UpdateProfile, message: Some("Unauthorized".to_owned()) })
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unreachable_outside_the_browser() {
    let api = HttpAuthApi::new(ApiConfig::default());
    let req = AuthRequest::Login { email: "a@b.com".to_owned(), password: "secret1".to_owned() };
    let result = futures::executor::block_on(api.send(&req, None));
    assert!(matches!(result, Err(RequestError::Unreachable { .. })));
    assert_eq!(api.config().auth_endpoint, crate::config::DEFAULT_AUTH_ENDPOINT);
}

#[test]
fn session_reply_with_empty_user_is_malformed() {
    let empty_user = reply(true, serde_json::json!({ "success": true, "session_token": "t", "user": {} })).unwrap();
    assert!(matches!(
        interpret_session_reply(ApiAction::Login, empty_user),
        Err(RequestError::Malformed { .. })
    ));
}
