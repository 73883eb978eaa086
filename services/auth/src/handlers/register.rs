use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::AuthServiceError;
use crate::handlers::dto::{MessageResponse, OTP_SENT, SessionResponse};
use crate::state::AppState;
use crate::usecase::register::{
    ConfirmRegistrationInput, ConfirmRegistrationUseCase, RequestRegistrationOtpInput,
    RequestRegistrationOtpUseCase,
};

// ── POST /auth/send-register-otp ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendRegisterOtpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub contact_number: String,
    pub designation: String,
}

pub async fn send_register_otp(
    State(state): State<AppState>,
    Json(body): Json<SendRegisterOtpRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthServiceError> {
    let usecase = RequestRegistrationOtpUseCase {
        users: state.user_repo(),
        cache: state.otp_cache(),
        mailer: state.otp_mailer(),
        hasher: state.hasher(),
    };
    usecase
        .execute(RequestRegistrationOtpInput {
            email: body.email,
            password: body.password,
            full_name: body.full_name,
            contact_number: body.contact_number,
            designation: body.designation,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(OTP_SENT)))
}

// ── POST /auth/verify-register-otp ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

pub async fn verify_register_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AuthServiceError> {
    let usecase = ConfirmRegistrationUseCase {
        users: state.user_repo(),
        cache: state.otp_cache(),
        hasher: state.hasher(),
        sessions: state.session_issuer(),
    };
    let output = usecase
        .execute(ConfirmRegistrationInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(output.into())))
}
