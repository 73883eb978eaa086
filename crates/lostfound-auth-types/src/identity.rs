//! Bearer-token identity extractor.

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::token::{AuthError, SessionIdentity, validate_session_token};

/// HMAC secret used to validate session tokens. Services expose it from their
/// state with `impl FromRef<AppState> for SessionSecret`.
#[derive(Debug, Clone)]
pub struct SessionSecret(pub String);

/// Why a request was refused before reaching the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRejection {
    MissingToken,
    InvalidToken,
    ExpiredToken,
}

impl IdentityRejection {
    pub fn kind(self) -> &'static str {
        match self {
            Self::MissingToken | Self::InvalidToken => "UNAUTHORIZED",
            Self::ExpiredToken => "TOKEN_EXPIRED",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::MissingToken => "missing bearer token",
            Self::InvalidToken => "invalid session token",
            Self::ExpiredToken => "session expired",
        }
    }
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.message(),
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Identity of the caller, taken from `Authorization: Bearer <session token>`.
///
/// Returns 401 if the header is absent, the token is not signed with the
/// service's [`SessionSecret`], or it has expired.
impl<S> FromRequestParts<S> for SessionIdentity
where
    SessionSecret: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send`; resolve synchronously
    // and hand back a 'static future so no borrow of `parts` is captured.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let SessionSecret(secret) = SessionSecret::from_ref(state);
        let result = match bearer_token(parts) {
            None => Err(IdentityRejection::MissingToken),
            Some(token) => validate_session_token(token, &secret).map_err(|e| {
                tracing::debug!(error = %e, "session token rejected");
                match e {
                    AuthError::Expired => IdentityRejection::ExpiredToken,
                    _ => IdentityRejection::InvalidToken,
                }
            }),
        };
        async move { result }
    }
}
