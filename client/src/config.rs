//! Client endpoint configuration.
//!
//! Values are baked in at compile time so the WASM bundle needs no runtime
//! config fetch:
//!
//! - `PORTAL_AUTH_ENDPOINT`: auth/profile API URL
//! - `PORTAL_UPLOAD_ENDPOINT`: avatar upload URL
//! - `PORTAL_AVATAR_PREVIEW_FALLBACK`: when truthy, a failed avatar upload
//!   sends the local preview URL instead of aborting the profile update

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_AUTH_ENDPOINT: &str = "https://functions.poehali.dev/c43cab11-b18a-476b-8724-e5478a6a9f57";
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "https://functions.poehali.dev/upload-avatar";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub auth_endpoint: String,
    pub upload_endpoint: String,
    pub avatar_preview_fallback: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_owned(),
            upload_endpoint: DEFAULT_UPLOAD_ENDPOINT.to_owned(),
            avatar_preview_fallback: false,
        }
    }
}

impl ApiConfig {
    /// Config from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTAL_AUTH_ENDPOINT"),
            option_env!("PORTAL_UPLOAD_ENDPOINT"),
            option_env!("PORTAL_AVATAR_PREVIEW_FALLBACK"),
        )
    }

    /// Build config from raw optional values; blank values fall back to
    /// defaults and an unparseable flag counts as disabled.
    pub fn from_values(auth: Option<&str>, upload: Option<&str>, preview_fallback: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            auth_endpoint: non_blank(auth).unwrap_or(defaults.auth_endpoint),
            upload_endpoint: non_blank(upload).unwrap_or(defaults.upload_endpoint),
            avatar_preview_fallback: preview_fallback.and_then(parse_bool).unwrap_or(false),
        }
    }
}

fn non_blank(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() { None } else { Some(value.to_owned()) }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
