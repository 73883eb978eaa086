//! Session-token (JWT) claims and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors returned by [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("token encoding failed")]
    Encoding,
}

/// JWT claims payload shared by token creation (auth service) and validation (every service).
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | user ID (UUID string) |
/// | `email` | custom | login email |
/// | `full_name` | custom | display name |
/// | `contact_number` | custom | display contact |
/// | `designation` | custom | e.g. student, staff |
/// | `exp` | `exp` | expiry, seconds since epoch |
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub email: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
    pub exp: u64,
}

/// User identity extracted from a validated session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub email: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
    pub expires_at: u64,
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked (default 60s leeway), required claims `exp` + `sub`.
fn decode_jwt(token: &str, secret: &str) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate a bearer session token, returning the identity it carries.
pub fn validate_session_token(token: &str, secret: &str) -> Result<SessionIdentity, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(SessionIdentity {
        user_id,
        email: claims.email,
        full_name: claims.full_name,
        contact_number: claims.contact_number,
        designation: claims.designation,
        expires_at: claims.exp,
    })
}

// ── Feature-gated: auth service (and test helpers) only ─────────────────────

/// Profile fields embedded into a new session token.
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
#[derive(Debug, Clone)]
pub struct SessionSubject<'a> {
    pub user_id: Uuid,
    pub email: &'a str,
    pub full_name: &'a str,
    pub contact_number: &'a str,
    pub designation: &'a str,
}

/// Sign a session token valid for `ttl_secs`. Returns the token and its `exp`.
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
pub fn issue_session_token(
    subject: &SessionSubject<'_>,
    secret: &str,
    ttl_secs: u64,
) -> Result<(String, u64), AuthError> {
    issue_session_token_at(subject, secret, now_secs() + ttl_secs)
}

/// Sign a session token with an explicit `exp` (tests use past values).
#[cfg(any(feature = "USE_ONLY_IN_AUTH_SERVICE", test))]
pub fn issue_session_token_at(
    subject: &SessionSubject<'_>,
    secret: &str,
    exp: u64,
) -> Result<(String, u64), AuthError> {
    use jsonwebtoken::{EncodingKey, Header, encode};

    let claims = SessionClaims {
        sub: subject.user_id.to_string(),
        email: subject.email.to_owned(),
        full_name: subject.full_name.to_owned(),
        contact_number: subject.contact_number.to_owned(),
        designation: subject.designation.to_owned(),
        exp,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::Encoding)?;
    Ok((token, exp))
}
