use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::error::AuthServiceError;
use crate::handlers::dto::{MessageResponse, OTP_SENT};
use crate::handlers::login::EmailRequest;
use crate::handlers::register::VerifyOtpRequest;
use crate::state::AppState;
use crate::usecase::password::{
    ConfirmPasswordResetOtpInput, ConfirmPasswordResetOtpUseCase, RequestPasswordResetOtpUseCase,
    UpdatePasswordInput, UpdatePasswordUseCase,
};

// ── POST /auth/send-password-otp ─────────────────────────────────────────────

pub async fn send_password_otp(
    State(state): State<AppState>,
    Json(body): Json<EmailRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AuthServiceError> {
    let usecase = RequestPasswordResetOtpUseCase {
        users: state.user_repo(),
        cache: state.otp_cache(),
        mailer: state.otp_mailer(),
        hasher: state.hasher(),
    };
    usecase.execute(&body.email).await?;
    Ok((StatusCode::CREATED, Json(OTP_SENT)))
}

// ── POST /auth/verify-password-otp ───────────────────────────────────────────

#[derive(Serialize)]
pub struct ResetTokenResponse {
    pub reset_token: String,
    pub expires_in: u64,
}

pub async fn verify_password_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<ResetTokenResponse>, AuthServiceError> {
    let usecase = ConfirmPasswordResetOtpUseCase {
        cache: state.otp_cache(),
        hasher: state.hasher(),
    };
    let output = usecase
        .execute(ConfirmPasswordResetOtpInput {
            email: body.email,
            otp: body.otp,
        })
        .await?;
    Ok(Json(ResetTokenResponse {
        reset_token: output.reset_token,
        expires_in: output.expires_in,
    }))
}

// ── POST /auth/update-password ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdatePasswordRequest {
    pub email: String,
    pub reset_token: String,
    pub new_password: String,
}

pub async fn update_password(
    State(state): State<AppState>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, AuthServiceError> {
    let usecase = UpdatePasswordUseCase {
        users: state.user_repo(),
        cache: state.otp_cache(),
        hasher: state.hasher(),
    };
    usecase
        .execute(UpdatePasswordInput {
            email: body.email,
            reset_token: body.reset_token,
            new_password: body.new_password,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
