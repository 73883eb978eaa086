use axum::{Json, extract::State};
use serde::Deserialize;

use lostfound_auth_types::token::SessionIdentity;

use crate::domain::types::ProfileUpdate;
use crate::error::AuthServiceError;
use crate::handlers::dto::{ProfileResponse, SessionResponse};
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};

// ── GET /users/me ────────────────────────────────────────────────────────────

pub async fn get_me(
    State(state): State<AppState>,
    identity: SessionIdentity,
) -> Result<Json<ProfileResponse>, AuthServiceError> {
    let usecase = GetProfileUseCase {
        users: state.user_repo(),
    };
    let user = usecase.execute(identity.user_id).await?;
    Ok(Json(ProfileResponse::from(&user)))
}

// ── PUT /users/profile ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub contact_number: Option<String>,
    pub designation: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<SessionResponse>, AuthServiceError> {
    let usecase = UpdateProfileUseCase {
        users: state.user_repo(),
        sessions: state.session_issuer(),
    };
    let output = usecase
        .execute(
            identity.user_id,
            ProfileUpdate {
                full_name: body.full_name,
                contact_number: body.contact_number,
                designation: body.designation,
            },
        )
        .await?;
    Ok(Json(output.into()))
}
