//! Local form validation run before any network call.
//!
//! Lengths are counted in characters, not bytes, so multi-byte nicknames
//! get the same limits as ASCII ones.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NICKNAME_LEN: usize = 3;
pub const MAX_NICKNAME_LEN: usize = 20;
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter your email")]
    EmailRequired,
    #[error("Enter your password")]
    PasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Enter a nickname")]
    NicknameRequired,
    #[error("Nickname must be {min} to {max} characters")]
    NicknameLength { min: usize, max: usize },
    #[error("File size must not exceed {}MB", max_bytes / (1024 * 1024))]
    AvatarTooLarge { max_bytes: u64 },
}

/// Email + password pair that passed local checks.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn require_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    Ok(email.to_owned())
}

/// Validate login input: both fields are required.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, ValidationError> {
    let email = require_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    Ok(Credentials { email, password: password.to_owned() })
}

/// Validate registration input. Confirmation is checked before length.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_registration(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Credentials, ValidationError> {
    let email = require_email(email)?;
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(Credentials { email, password: password.to_owned() })
}

/// Validate a nickname. Blank input is reported separately from a length
/// violation; the length rule applies to the text as typed.
///
/// # Errors
///
/// Returns the first failing rule.
pub fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.trim().is_empty() {
        return Err(ValidationError::NicknameRequired);
    }
    let len = nickname.chars().count();
    if !(MIN_NICKNAME_LEN..=MAX_NICKNAME_LEN).contains(&len) {
        return Err(ValidationError::NicknameLength { min: MIN_NICKNAME_LEN, max: MAX_NICKNAME_LEN });
    }
    Ok(())
}

/// Input-layer cap matching the field's `maxlength`.
pub fn cap_nickname_input(raw: &str) -> String {
    raw.chars().take(MAX_NICKNAME_LEN).collect()
}

/// Reject avatar files above the upload limit. `size` is the browser's
/// `File.size`, which is a float.
///
/// # Errors
///
/// Returns `AvatarTooLarge` when the file exceeds `MAX_AVATAR_BYTES`.
#[allow(clippy::cast_precision_loss)]
pub fn validate_avatar_size(size: f64) -> Result<(), ValidationError> {
    if size > MAX_AVATAR_BYTES as f64 {
        return Err(ValidationError::AvatarTooLarge { max_bytes: MAX_AVATAR_BYTES });
    }
    Ok(())
}
