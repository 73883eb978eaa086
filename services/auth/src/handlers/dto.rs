use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use lostfound_core::serde::to_rfc3339_ms;

use crate::domain::types::{AuthenticatedUser, User};

/// Public profile. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            contact_number: user.contact_number.clone(),
            designation: user.designation.clone(),
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    /// Seconds since epoch.
    pub expires_at: u64,
    pub user: ProfileResponse,
}

impl From<AuthenticatedUser> for SessionResponse {
    fn from(auth: AuthenticatedUser) -> Self {
        Self {
            user: ProfileResponse::from(&auth.user),
            token: auth.session.token,
            expires_at: auth.session.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub const OTP_SENT: MessageResponse = MessageResponse {
    message: "otp sent",
};
