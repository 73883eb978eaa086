use chrono::{DateTime, NaiveDate};

use crate::error::ClaimsServiceError;

/// Trimmed, non-empty text.
pub(crate) fn text(field: &'static str, raw: &str) -> Result<String, ClaimsServiceError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ClaimsServiceError::InvalidField(field));
    }
    Ok(value.to_owned())
}

/// Trimmed text, with blank treated as absent.
pub(crate) fn optional_text(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// `YYYY-MM-DD`, or the date part of an RFC 3339 timestamp.
pub(crate) fn date(field: &'static str, raw: &str) -> Result<NaiveDate, ClaimsServiceError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(raw).map(|dt| dt.date_naive()))
        .map_err(|_| ClaimsServiceError::InvalidField(field))
}
