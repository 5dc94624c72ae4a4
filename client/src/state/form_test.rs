use super::*;
use crate::net::error::ApiAction;
use crate::state::toast::ToastVariant;

#[test]
fn validation_error_becomes_destructive_notice_without_redirect() {
    let outcome = FormOutcome::failed(&FormError::from(ValidationError::PasswordMismatch));
    assert_eq!(outcome.notice.variant, ToastVariant::Destructive);
    assert_eq!(outcome.notice.title, "Error");
    assert_eq!(outcome.notice.description, "Passwords do not match");
    assert_eq!(outcome.redirect, None);
}

#[test]
fn rejected_request_uses_action_title_and_server_text() {
    let err = FormError::from(RequestError::Rejected { action: ApiAction::Login, message: Some("Nope".to_owned()) });
    let notice = err.notice();
    assert_eq!(notice.title, "Sign-in failed");
    assert_eq!(notice.description, "Nope");
    assert!(!err.is_local());
}

#[test]
fn signed_out_redirects_to_login() {
    let outcome = FormOutcome::failed(&FormError::SignedOut);
    assert_eq!(outcome.redirect, Some(LOGIN_ROUTE));
    assert!(outcome.notice.is_destructive());
}

#[test]
fn from_result_success_redirects_home() {
    let outcome = FormOutcome::from_result(Ok(Notice::info("Done", "")), HOME_ROUTE);
    assert_eq!(outcome.redirect, Some("/"));
    assert!(!outcome.notice.is_destructive());
}
