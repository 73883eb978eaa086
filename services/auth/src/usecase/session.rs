use lostfound_auth_types::token::{SessionSubject, issue_session_token};

use crate::domain::types::{IssuedSession, User};
use crate::error::AuthServiceError;

/// Signs session tokens carrying the user's public profile.
#[derive(Debug, Clone)]
pub struct SessionIssuer {
    pub jwt_secret: String,
    pub ttl_secs: u64,
}

impl SessionIssuer {
    pub fn issue(&self, user: &User) -> Result<IssuedSession, AuthServiceError> {
        let subject = SessionSubject {
            user_id: user.id,
            email: &user.email,
            full_name: &user.full_name,
            contact_number: &user.contact_number,
            designation: &user.designation,
        };
        let (token, expires_at) = issue_session_token(&subject, &self.jwt_secret, self.ttl_secs)
            .map_err(|e| {
                AuthServiceError::Internal(anyhow::Error::new(e).context("sign session token"))
            })?;
        Ok(IssuedSession { token, expires_at })
    }
}
