use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered account as stored by the credential store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub contact_number: Option<String>,
    pub designation: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.contact_number.is_none() && self.designation.is_none()
    }
}

/// What an OTP was issued for. Decides the cache namespace and the mail template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OtpPurpose {
    Registration,
    Login,
    PasswordReset,
}

impl OtpPurpose {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::Login => "login",
            Self::PasswordReset => "password_reset",
        }
    }
}

/// Cache key for a pending OTP or reset token, one live entry per email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpKey {
    Registration(String),
    Login(String),
    PasswordReset(String),
    ResetToken(String),
}

impl OtpKey {
    pub fn for_purpose(purpose: OtpPurpose, email: &str) -> Self {
        match purpose {
            OtpPurpose::Registration => Self::Registration(email.to_owned()),
            OtpPurpose::Login => Self::Login(email.to_owned()),
            OtpPurpose::PasswordReset => Self::PasswordReset(email.to_owned()),
        }
    }
}

impl OtpKey {
    /// Namespace segment of the rendered key. Safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Registration(_) => "register",
            Self::Login(_) => "login",
            Self::PasswordReset(_) => "reset",
            Self::ResetToken(_) => "reset-token",
        }
    }
}

impl fmt::Display for OtpKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Self::Registration(email)
        | Self::Login(email)
        | Self::PasswordReset(email)
        | Self::ResetToken(email)) = self;
        write!(f, "otp:{}:{email}", self.kind())
    }
}

/// Cached payload for login and password-reset OTPs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingOtp {
    pub otp_hash: String,
}

/// Cached payload for a registration awaiting OTP confirmation.
///
/// Holds the submitted password in clear until confirmation re-hashes it; the
/// record only lives for [`OTP_TTL_SECS`].
#[derive(Clone, Serialize, Deserialize)]
pub struct PendingRegistration {
    pub otp_hash: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
}

impl fmt::Debug for PendingRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingRegistration")
            .field("email", &self.email)
            .field("full_name", &self.full_name)
            .field("contact_number", &self.contact_number)
            .field("designation", &self.designation)
            .finish_non_exhaustive()
    }
}

/// Cached payload for an issued password-reset token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingResetToken {
    pub token_hash: String,
}

/// Signed session token handed to the client.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    /// Seconds since epoch.
    pub expires_at: u64,
}

/// Result of every workflow that logs a user in.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub session: IssuedSession,
}

/// OTP length in digits.
pub const OTP_LEN: usize = 6;

/// OTP time-to-live in seconds.
pub const OTP_TTL_SECS: u64 = 300;

/// Verification attempts allowed per issued code. The next one burns it.
pub const MAX_OTP_ATTEMPTS: u64 = 5;

/// Password-reset token length in characters.
pub const RESET_TOKEN_LEN: usize = 32;

/// Password-reset token time-to-live in seconds.
pub const RESET_TOKEN_TTL_SECS: u64 = 900;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and lowercase an email so lookups and cache keys agree.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Cheap shape check: one `@`, non-empty local part, dotted domain, no spaces.
pub fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}
