//! Result of submitting one of the auth screens.
//!
//! Every submission ends in exactly one notice and, on success, a redirect.
//! Errors are terminal for the attempt and never retried.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::toast::Notice;
use crate::net::error::RequestError;
use crate::util::validation::ValidationError;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("Sign in to continue")]
    SignedOut,
}

impl FormError {
    pub fn notice(&self) -> Notice {
        let title = match self {
            FormError::Request(err) => err.title(),
            FormError::Validation(_) | FormError::SignedOut => "Error",
        };
        Notice::error(title, self.to_string())
    }

    /// Where to send the user after this error, if anywhere.
    pub fn redirect(&self) -> Option<&'static str> {
        match self {
            FormError::SignedOut => Some(LOGIN_ROUTE),
            FormError::Validation(_) | FormError::Request(_) => None,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, FormError::Validation(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormOutcome {
    pub notice: Notice,
    pub redirect: Option<&'static str>,
}

impl FormOutcome {
    pub fn success(notice: Notice, redirect: &'static str) -> Self {
        Self { notice, redirect: Some(redirect) }
    }

    pub fn failed(err: &FormError) -> Self {
        if let FormError::Request(request) = err {
            log::warn!("request failed: {request} ({})", request.detail());
        }
        Self { notice: err.notice(), redirect: err.redirect() }
    }

    pub fn from_result(result: Result<Notice, FormError>, redirect: &'static str) -> Self {
        match result {
            Ok(notice) => Self::success(notice, redirect),
            Err(err) => Self::failed(&err),
        }
    }
}
