use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::AuthServiceError;
use crate::handlers::dto::{MessageResponse, OTP_SENT, SessionResponse};
use crate::handlers::register::VerifyOtpRequest;
use crate::state::AppState;
use crate::usecase::login::{
    ConfirmLoginOtpInput, ConfirmLoginOtpUseCase, LoginInput, LoginUseCase,
    RequestLoginOtpUseCase,
};

#[derive(Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
        sessions: state.session_issuer(),
    };
    let output = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(output.into()))
}

// ── POST /auth/send-login-otp ────────────────────────────────────────────────

pub async fn send_login_otp(
    State(state): State<AppState>,
    Json(body): Json<EmailRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthServiceError> {
    let usecase = RequestLoginOtpUseCase {
        users: state.user_repo(),
        cache: state.otp_cache(),
        mailer: state.otp_mailer(),
        hasher: state.hasher(),
    };
    usecase.execute(&body.email).await?;
    Ok((StatusCode::CREATED, Json(OTP_SENT)))
}

// ── POST /auth/verify-login-otp ──────────────────────────────────────────────

pub async fn verify_login_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let usecase = ConfirmLoginOtpUseCase {
        users: state.user_repo(),
        cache: state.otp_cache(),
        hasher: state.hasher(),
        sessions: state.session_issuer(),
    };
    let output = usecase
        .execute(ConfirmLoginOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok(Json(output.into()))
}
