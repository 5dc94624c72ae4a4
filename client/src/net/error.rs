//! Request failures reported by the auth/profile API or its transport.
//!
//! ERROR HANDLING
//! ==============
//! `Display` is the text shown to the user. Transport details are kept in
//! `detail` fields for logging only.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Which API action a request performed. Drives default failure texts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiAction {
    Login,
    Register,
    UpdateProfile,
}

impl ApiAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiAction::Login => "login",
            ApiAction::Register => "register",
            ApiAction::UpdateProfile => "update_profile",
        }
    }

    /// Shown when the server rejects the request without an `error` field.
    pub fn default_failure(self) -> &'static str {
        match self {
            ApiAction::Login => "Invalid email or password",
            ApiAction::Register => "Registration failed",
            ApiAction::UpdateProfile => "Could not update profile",
        }
    }

    /// Notification title for a server-side rejection.
    pub fn failure_title(self) -> &'static str {
        match self {
            ApiAction::Login => "Sign-in failed",
            ApiAction::Register => "Registration failed",
            ApiAction::UpdateProfile => "Error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The server answered but reported failure.
    #[error("{}", message.as_deref().unwrap_or(action.default_failure()))]
    Rejected { action: ApiAction, message: Option<String> },
    /// The request never produced a readable reply.
    #[error("Could not connect to the server")]
    Unreachable { detail: String },
    /// A success reply lacked the session token or user.
    #[error("Unexpected response from the server")]
    Malformed { detail: String },
    #[error("Avatar upload failed")]
    UploadFailed { detail: String },
}

impl RequestError {
    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self::Unreachable { detail: detail.into() }
    }

    /// Notification title for this failure.
    pub fn title(&self) -> &'static str {
        match self {
            RequestError::Rejected { action, .. } => action.failure_title(),
            RequestError::Unreachable { .. } | RequestError::Malformed { .. } | RequestError::UploadFailed { .. } => {
                "Error"
            }
        }
    }

    /// Diagnostic text for logs.
    pub fn detail(&self) -> &str {
        match self {
            RequestError::Rejected { message, .. } => message.as_deref().unwrap_or(""),
            RequestError::Unreachable { detail }
            | RequestError::Malformed { detail }
            | RequestError::UploadFailed { detail } => detail,
        }
    }
}
