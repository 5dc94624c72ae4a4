//! Scripted `AuthApi` for flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::api::AuthApi;
use super::error::RequestError;
use super::types::{ApiReply, ApiResponse, AuthRequest};

/// Build a reply from an HTTP ok flag and a JSON body.
pub fn reply(ok: bool, body: serde_json::Value) -> Result<ApiReply, RequestError> {
    let body: ApiResponse = serde_json::from_value(body).map_err(|e| RequestError::unreachable(e.to_string()))?;
    Ok(ApiReply { ok, status: if ok { 200 } else { 400 }, body })
}

/// Replays queued replies in order and records every call.
#[derive(Default)]
pub struct ScriptedApi {
    replies: RefCell<VecDeque<Result<ApiReply, RequestError>>>,
    uploads: RefCell<VecDeque<Result<String, RequestError>>>,
    pub sent: RefCell<Vec<(AuthRequest, Option<String>)>>,
    pub uploaded: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reply(self, reply: Result<ApiReply, RequestError>) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    #[must_use]
    pub fn with_upload(self, result: Result<String, RequestError>) -> Self {
        self.uploads.borrow_mut().push_back(result);
        self
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

#[async_trait(?Send)]
impl AuthApi for ScriptedApi {
    type Upload = String;

    async fn send(&self, request: &AuthRequest, session_token: Option<&str>) -> Result<ApiReply, RequestError> {
        self.sent.borrow_mut().push((request.clone(), session_token.map(str::to_owned)));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::unreachable("no scripted reply")))
    }

    async fn upload_avatar(&self, file: &Self::Upload) -> Result<String, RequestError> {
        self.uploaded.borrow_mut().push(file.clone());
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::UploadFailed { detail: "no scripted upload".to_owned() }))
    }
}
