//! Wire DTOs for the auth/profile API and the avatar upload endpoint.
//!
//! DESIGN
//! ======
//! The API is a single endpoint discriminated by an `action` field, so
//! requests are one internally tagged enum. Reply fields are all optional;
//! interpretation of success vs. failure lives in `api`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiAction;

/// Header carrying the session token on authenticated requests.
pub const SESSION_HEADER: &str = "X-Session-Token";

/// Multipart field name for the avatar file.
pub const UPLOAD_FIELD: &str = "file";

#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AuthRequest {
    Login { email: String, password: String },
    Register { email: String, password: String },
    UpdateProfile { nickname: String, avatar_url: String },
}

impl AuthRequest {
    pub fn action(&self) -> ApiAction {
        match self {
            AuthRequest::Login { .. } => ApiAction::Login,
            AuthRequest::Register { .. } => ApiAction::Register,
            AuthRequest::UpdateProfile { .. } => ApiAction::UpdateProfile,
        }
    }
}

impl std::fmt::Debug for AuthRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthRequest::Login { email, .. } | AuthRequest::Register { email, .. } => f
                .debug_struct(self.action().as_str())
                .field("email", email)
                .finish_non_exhaustive(),
            AuthRequest::UpdateProfile { nickname, avatar_url } => f
                .debug_struct("update_profile")
                .field("nickname", nickname)
                .field("avatar_url", avatar_url)
                .finish(),
        }
    }
}

/// User object embedded in auth replies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiUser {
    #[serde(default)]
    pub email: String,
}

/// Body of every auth/profile reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub error: Option<String>,
}

/// HTTP status flag plus decoded body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiReply {
    pub ok: bool,
    pub status: u16,
    pub body: ApiResponse,
}

/// Body of the avatar upload reply.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}
