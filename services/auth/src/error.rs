use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("invalid {0}")]
    InvalidField(&'static str),
    #[error("password must be at least 8 characters")]
    WeakPassword,
    #[error("no profile fields to update")]
    MissingData,
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("user not found")]
    UserNotFound,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("otp expired or not requested")]
    OtpExpired,
    #[error("invalid otp")]
    InvalidOtp,
    #[error("too many otp attempts, request a new code")]
    OtpAttemptsExceeded,
    #[error("invalid or expired reset token")]
    InvalidResetToken,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::MissingData => "MISSING_DATA",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::InvalidOtp => "INVALID_OTP",
            Self::OtpAttemptsExceeded => "OTP_ATTEMPTS_EXCEEDED",
            Self::InvalidResetToken => "INVALID_RESET_TOKEN",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidField(_)
            | Self::WeakPassword
            | Self::MissingData
            | Self::OtpExpired
            | Self::InvalidResetToken => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::InvalidOtp => StatusCode::UNAUTHORIZED,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::EmailAlreadyRegistered => StatusCode::CONFLICT,
            Self::OtpAttemptsExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // TraceLayer records every status; only 500s need the error chain.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
