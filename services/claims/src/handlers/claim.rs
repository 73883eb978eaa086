use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use lostfound_auth_types::token::SessionIdentity;

use crate::domain::types::ProofImage;
use crate::error::ClaimsServiceError;
use crate::handlers::dto::{ClaimResponse, RankingResponse, actor, collect};
use crate::state::AppState;
use crate::usecase::claim::{
    CreateClaimInput, CreateClaimUseCase, ListClaimsForItemUseCase, ListMyClaimsUseCase,
};
use crate::usecase::ranking::RankClaimsUseCase;
use crate::usecase::resolution::{ApproveClaimUseCase, RejectClaimUseCase};

/// Upper bound for the multipart claim form, proof image included.
pub const MAX_CLAIM_FORM_BYTES: usize = 10 * 1024 * 1024;

// ── POST /claim-items/{found_item_id} ────────────────────────────────────────

pub async fn create_claim(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(found_item_id): Path<Uuid>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ClaimResponse>), ClaimsServiceError> {
    let input = read_claim_form(multipart).await?;
    let usecase = CreateClaimUseCase {
        items: state.found_item_repo(),
        claims: state.claim_repo(),
        images: state.image_store(),
        notifications: state.notification_dispatcher(),
    };
    let claim = usecase
        .execute(found_item_id, &actor(&identity), input)
        .await?;
    Ok((StatusCode::CREATED, Json(claim.into())))
}

/// Accepts camelCase and snake_case field names. An empty file part counts as no image.
async fn read_claim_form(mut multipart: Multipart) -> Result<CreateClaimInput, ClaimsServiceError> {
    let mut description = None;
    let mut additional_info = None;
    let mut proof_image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ClaimsServiceError::InvalidField("form"))?
    {
        let name = field.name().unwrap_or_default().to_owned();
        match name.as_str() {
            "description" => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|_| ClaimsServiceError::InvalidField("description"))?,
                );
            }
            "additionalInfo" | "additional_info" => {
                additional_info = Some(
                    field
                        .text()
                        .await
                        .map_err(|_| ClaimsServiceError::InvalidField("additional_info"))?,
                );
            }
            "proofImage" | "proof_image" => {
                let content_type = field.content_type().unwrap_or_default().to_owned();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ClaimsServiceError::InvalidField("proof_image"))?;
                if !bytes.is_empty() {
                    proof_image = Some(ProofImage {
                        content_type,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(CreateClaimInput {
        description: description.unwrap_or_default(),
        additional_info,
        proof_image,
    })
}

// ── GET /claim-items/personal ────────────────────────────────────────────────

pub async fn list_my_claims(
    State(state): State<AppState>,
    identity: SessionIdentity,
) -> Result<Json<Vec<ClaimResponse>>, ClaimsServiceError> {
    let usecase = ListMyClaimsUseCase {
        claims: state.claim_repo(),
    };
    Ok(Json(collect(usecase.execute(identity.user_id).await?)))
}

// ── GET /claim-items/found/{found_item_id} ───────────────────────────────────

pub async fn list_claims_for_item(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(found_item_id): Path<Uuid>,
) -> Result<Json<Vec<ClaimResponse>>, ClaimsServiceError> {
    let usecase = ListClaimsForItemUseCase {
        items: state.found_item_repo(),
        claims: state.claim_repo(),
    };
    let claims = usecase.execute(found_item_id, identity.user_id).await?;
    Ok(Json(collect(claims)))
}

// ── GET /claim-items/found/{found_item_id}/ranking ───────────────────────────

pub async fn rank_claims(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(found_item_id): Path<Uuid>,
) -> Result<Json<RankingResponse>, ClaimsServiceError> {
    let usecase = RankClaimsUseCase {
        items: state.found_item_repo(),
        claims: state.claim_repo(),
        scorer: state.similarity_scorer(),
    };
    let report = usecase.execute(found_item_id, identity.user_id).await?;
    Ok(Json(report.into()))
}

// ── PATCH /claim-items/approve/{claim_id} ────────────────────────────────────

pub async fn approve_claim(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(claim_id): Path<Uuid>,
) -> Result<Json<ClaimResponse>, ClaimsServiceError> {
    let usecase = ApproveClaimUseCase {
        claims: state.claim_repo(),
        items: state.found_item_repo(),
        resolutions: state.resolution_repo(),
        notifications: state.notification_dispatcher(),
    };
    let claim = usecase.execute(claim_id, identity.user_id).await?;
    Ok(Json(claim.into()))
}

// ── PATCH /claim-items/reject/{claim_id} ─────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RejectRequest {
    pub feedback: Option<String>,
}

/// An empty body is the same as `{}`.
fn parse_reject_body(body: &[u8]) -> Result<RejectRequest, ClaimsServiceError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RejectRequest::default());
    }
    serde_json::from_slice(body).map_err(|_| ClaimsServiceError::InvalidField("body"))
}

pub async fn reject_claim(
    State(state): State<AppState>,
    identity: SessionIdentity,
    Path(claim_id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<ClaimResponse>, ClaimsServiceError> {
    let request = parse_reject_body(&body)?;
    let usecase = RejectClaimUseCase {
        claims: state.claim_repo(),
        items: state.found_item_repo(),
        notifications: state.notification_dispatcher(),
    };
    let claim = usecase
        .execute(claim_id, request.feedback, identity.user_id)
        .await?;
    Ok(Json(claim.into()))
}
