use crate::domain::types::{MIN_PASSWORD_LEN, is_plausible_email, normalize_email};
use crate::error::AuthServiceError;

pub(crate) fn email(raw: &str) -> Result<String, AuthServiceError> {
    let email = normalize_email(raw);
    if !is_plausible_email(&email) {
        return Err(AuthServiceError::InvalidField("email"));
    }
    Ok(email)
}

pub(crate) fn password(raw: &str) -> Result<(), AuthServiceError> {
    if raw.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthServiceError::WeakPassword);
    }
    Ok(())
}

/// Trimmed, non-empty text.
pub(crate) fn text(field: &'static str, raw: &str) -> Result<String, AuthServiceError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AuthServiceError::InvalidField(field));
    }
    Ok(value.to_owned())
}
