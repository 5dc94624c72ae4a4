//! HTTP client for the auth/profile API and avatar uploads.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `Unreachable` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems and undecodable bodies both become
//! `RequestError::Unreachable`; a decoded body is judged by
//! `interpret_session_reply` / `interpret_profile_reply`, which are pure so
//! pages and tests share one definition of "success".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::error::{ApiAction, RequestError};
#[cfg(feature = "hydrate")]
use super::types::{ApiResponse, SESSION_HEADER, UPLOAD_FIELD, UploadResponse};
use super::types::{ApiReply, AuthRequest};
use crate::config::ApiConfig;
use crate::state::session::Session;

/// Seam between screens and the remote API.
#[async_trait(?Send)]
pub trait AuthApi {
    /// File handle accepted by `upload_avatar`.
    type Upload: 'static;

    /// POST one action to the auth/profile endpoint.
    async fn send(&self, request: &AuthRequest, session_token: Option<&str>) -> Result<ApiReply, RequestError>;

    /// Upload an avatar and return its public URL.
    async fn upload_avatar(&self, file: &Self::Upload) -> Result<String, RequestError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn upload_failed_message(status: u16) -> String {
    format!("avatar upload failed: {status}")
}

/// Judge a login/register reply. Success needs an OK status, `success:
/// true`, a non-empty session token and a user with an email.
///
/// # Errors
///
/// `Rejected` with the server text for failures, `Malformed` when a success
/// reply is missing its payload.
pub fn interpret_session_reply(action: ApiAction, reply: ApiReply) -> Result<Session, RequestError> {
    let ApiReply { ok, status, body } = reply;
    if !(ok && body.success) {
        return Err(RequestError::Rejected { action, message: body.error });
    }
    let Some(token) = body.session_token.filter(|t| !t.is_empty()) else {
        return Err(RequestError::Malformed { detail: format!("{} reply ({status}) has no session_token", action.as_str()) });
    };
    let Some(user) = body.user.filter(|u| !u.email.is_empty()) else {
        return Err(RequestError::Malformed { detail: format!("{} reply ({status}) has no user email", action.as_str()) });
    };
    Ok(Session { token, email: user.email })
}

/// Judge an `update_profile` reply.
///
/// # Errors
///
/// `Rejected` with the server text when the update did not succeed.
pub fn interpret_profile_reply(reply: ApiReply) -> Result<(), RequestError> {
    if reply.ok && reply.body.success {
        Ok(())
    } else {
        Err(RequestError::Rejected { action: ApiAction::UpdateProfile, message: reply.body.error })
    }
}

/// `gloo-net` implementation of `AuthApi`.
#[derive(Clone, Debug, Default)]
pub struct HttpAuthApi {
    config: ApiConfig,
}

impl HttpAuthApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    #[cfg(feature = "hydrate")]
    type Upload = web_sys::File;
    #[cfg(not(feature = "hydrate"))]
    type Upload = ();

    async fn send(&self, request: &AuthRequest, session_token: Option<&str>) -> Result<ApiReply, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("auth api: {request:?}");
            let mut builder = gloo_net::http::Request::post(&self.config.auth_endpoint);
            if let Some(token) = session_token {
                builder = builder.header(SESSION_HEADER, token);
            }
            let resp = builder
                .json(request)
                .map_err(|e| RequestError::unreachable(e.to_string()))?
                .send()
                .await
                .map_err(|e| RequestError::unreachable(e.to_string()))?;
            let ok = resp.ok();
            let status = resp.status();
            let body = resp
                .json::<ApiResponse>()
                .await
                .map_err(|e| RequestError::unreachable(format!("{status}: {e}")))?;
            Ok(ApiReply { ok, status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session_token);
            Err(RequestError::unreachable("not available on server"))
        }
    }

    async fn upload_avatar(&self, file: &Self::Upload) -> Result<String, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let failed = |detail: String| RequestError::UploadFailed { detail };
            let form = web_sys::FormData::new().map_err(|e| failed(format!("{e:?}")))?;
            form.append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
                .map_err(|e| failed(format!("{e:?}")))?;
            let resp = gloo_net::http::Request::post(&self.config.upload_endpoint)
                .body(form)
                .map_err(|e| failed(e.to_string()))?
                .send()
                .await
                .map_err(|e| failed(e.to_string()))?;
            if !resp.ok() {
                return Err(failed(upload_failed_message(resp.status())));
            }
            let body: UploadResponse = resp.json().await.map_err(|e| failed(e.to_string()))?;
            if body.url.is_empty() {
                return Err(failed("upload reply has empty url".to_owned()));
            }
            Ok(body.url)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = file;
            Err(RequestError::UploadFailed { detail: "not available on server".to_owned() })
        }
    }
}
