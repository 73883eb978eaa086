use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use lostfound_domain::status::{ClaimStatus, ItemStatus};

use crate::domain::repository::{
    ClaimRepository, FoundItemRepository, ImageStore, NotificationDispatcher,
};
use crate::domain::types::{Actor, Claim, NotificationIntent, ProofImage};
use crate::error::ClaimsServiceError;
use crate::usecase::validate;

// ── CreateClaim ──────────────────────────────────────────────────────────────

pub struct CreateClaimInput {
    pub description: String,
    pub additional_info: Option<String>,
    pub proof_image: Option<ProofImage>,
}

pub struct CreateClaimUseCase<I, C, S, D>
where
    I: FoundItemRepository,
    C: ClaimRepository,
    S: ImageStore,
    D: NotificationDispatcher,
{
    pub items: I,
    pub claims: C,
    pub images: S,
    pub notifications: D,
}

impl<I, C, S, D> CreateClaimUseCase<I, C, S, D>
where
    I: FoundItemRepository,
    C: ClaimRepository,
    S: ImageStore,
    D: NotificationDispatcher,
{
    pub async fn execute(
        &self,
        found_item_id: Uuid,
        claimant: &Actor,
        input: CreateClaimInput,
    ) -> Result<Claim, ClaimsServiceError> {
        let description = validate::text("description", &input.description)?;
        let additional_info = validate::optional_text(input.additional_info);
        if input.proof_image.as_ref().is_some_and(|img| !img.is_image()) {
            return Err(ClaimsServiceError::InvalidProofImage);
        }

        let item = self
            .items
            .find_by_id(found_item_id)
            .await?
            .ok_or(ClaimsServiceError::FoundItemNotFound)?;
        if item.is_reported_by(claimant.id) {
            return Err(ClaimsServiceError::CannotClaimOwnItem);
        }
        if item.status != ItemStatus::Pending {
            return Err(ClaimsServiceError::ItemNotPending);
        }
        if self.claims.exists_for(item.id, claimant.id).await? {
            return Err(ClaimsServiceError::DuplicateClaim);
        }

        let proof_image_url = match input.proof_image {
            Some(image) => Some(self.images.store(image).await?),
            None => None,
        };

        let now = Utc::now();
        let claim = Claim {
            id: Uuid::now_v7(),
            found_item_id: item.id,
            reporter_id: item.reporter_id,
            claimant_id: claimant.id,
            claimant_name: claimant.name.clone(),
            claimant_contact: claimant.contact.clone(),
            description,
            proof_image_url,
            additional_info,
            status: ClaimStatus::Pending,
            rejection_feedback: None,
            created_at: now,
            updated_at: now,
        };
        if let Err(err) = self.claims.create(&claim).await {
            if let Some(url) = &claim.proof_image_url {
                if let Err(e) = self.images.discard(url).await {
                    warn!(url = %url, error = ?e, "failed to discard unreferenced proof image");
                }
            }
            return Err(err);
        }

        self.notifications
            .dispatch(NotificationIntent::claim_received(&item, &claim));
        Ok(claim)
    }
}

// ── ListClaimsForItem ────────────────────────────────────────────────────────

pub struct ListClaimsForItemUseCase<I: FoundItemRepository, C: ClaimRepository> {
    pub items: I,
    pub claims: C,
}

impl<I: FoundItemRepository, C: ClaimRepository> ListClaimsForItemUseCase<I, C> {
    pub async fn execute(
        &self,
        found_item_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Vec<Claim>, ClaimsServiceError> {
        let item = self
            .items
            .find_by_id(found_item_id)
            .await?
            .ok_or(ClaimsServiceError::FoundItemNotFound)?;
        if !item.is_reported_by(requester_id) {
            return Err(ClaimsServiceError::NotItemReporter);
        }
        self.claims.list_by_found_item(found_item_id).await
    }
}

// ── ListMyClaims ─────────────────────────────────────────────────────────────

pub struct ListMyClaimsUseCase<C: ClaimRepository> {
    pub claims: C,
}

impl<C: ClaimRepository> ListMyClaimsUseCase<C> {
    pub async fn execute(&self, claimant_id: Uuid) -> Result<Vec<Claim>, ClaimsServiceError> {
        self.claims.list_by_claimant(claimant_id).await
    }
}
