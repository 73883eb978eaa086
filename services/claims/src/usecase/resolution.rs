use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::domain::repository::{
    ClaimRepository, FoundItemRepository, NotificationDispatcher, ResolutionRepository,
};
use crate::domain::types::{
    ApprovalRequest, Claim, DEFAULT_REJECTION_FEEDBACK, FALLBACK_ITEM_LABEL, FoundItem,
    NotificationIntent,
};
use crate::error::ClaimsServiceError;
use crate::usecase::validate;

fn label_for(item: Option<&FoundItem>) -> String {
    item.map_or_else(|| FALLBACK_ITEM_LABEL.to_owned(), FoundItem::label)
}

// ── ApproveClaim ─────────────────────────────────────────────────────────────

pub struct ApproveClaimUseCase<C, I, R, D>
where
    C: ClaimRepository,
    I: FoundItemRepository,
    R: ResolutionRepository,
    D: NotificationDispatcher,
{
    pub claims: C,
    pub items: I,
    pub resolutions: R,
    pub notifications: D,
}

impl<C, I, R, D> ApproveClaimUseCase<C, I, R, D>
where
    C: ClaimRepository,
    I: FoundItemRepository,
    R: ResolutionRepository,
    D: NotificationDispatcher,
{
    /// Approve one claim, reject its pending siblings and resolve the item, atomically.
    ///
    /// Notifications go out only after the write has committed.
    pub async fn execute(
        &self,
        claim_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Claim, ClaimsServiceError> {
        let claim = self
            .claims
            .find_by_id(claim_id)
            .await?
            .ok_or(ClaimsServiceError::ClaimNotFound)?;
        if claim.status.is_decided() {
            return Err(ClaimsServiceError::ClaimAlreadyDecided);
        }
        if !claim.is_decided_by(requester_id) {
            return Err(ClaimsServiceError::NotItemReporter);
        }

        // The item may have been deleted; the claim can still be decided.
        let item = self.items.find_by_id(claim.found_item_id).await?;

        let outcome = self
            .resolutions
            .approve(&ApprovalRequest {
                claim_id: claim.id,
                found_item_id: claim.found_item_id,
                resolve_item: item.is_some(),
                returned_to: claim.claimant_name.clone(),
                decided_at: Utc::now(),
            })
            .await?;

        info!(
            claim_id = %outcome.approved.id,
            found_item_id = %outcome.approved.found_item_id,
            auto_rejected = outcome.auto_rejected.len(),
            "claim approved"
        );

        let label = label_for(outcome.item.as_ref().or(item.as_ref()));
        self.notifications
            .dispatch(NotificationIntent::claim_approved(&outcome.approved, &label));
        for sibling in &outcome.auto_rejected {
            self.notifications
                .dispatch(NotificationIntent::claim_rejected(sibling, &label));
        }

        Ok(outcome.approved)
    }
}

// ── RejectClaim ──────────────────────────────────────────────────────────────

pub struct RejectClaimUseCase<C, I, D>
where
    C: ClaimRepository,
    I: FoundItemRepository,
    D: NotificationDispatcher,
{
    pub claims: C,
    pub items: I,
    pub notifications: D,
}

impl<C, I, D> RejectClaimUseCase<C, I, D>
where
    C: ClaimRepository,
    I: FoundItemRepository,
    D: NotificationDispatcher,
{
    pub async fn execute(
        &self,
        claim_id: Uuid,
        feedback: Option<String>,
        requester_id: Uuid,
    ) -> Result<Claim, ClaimsServiceError> {
        let claim = self
            .claims
            .find_by_id(claim_id)
            .await?
            .ok_or(ClaimsServiceError::ClaimNotFound)?;

        if !claim.is_decided_by(requester_id) {
            return Err(ClaimsServiceError::NotItemReporter);
        }
        if claim.status.is_decided() {
            return Err(ClaimsServiceError::ClaimAlreadyDecided);
        }

        let feedback = validate::optional_text(feedback)
            .unwrap_or_else(|| DEFAULT_REJECTION_FEEDBACK.to_owned());
        let rejected = self
            .claims
            .reject_pending(claim.id, &feedback)
            .await?
            .ok_or(ClaimsServiceError::ClaimAlreadyDecided)?;

        info!(claim_id = %rejected.id, "claim rejected");

        let item = self.items.find_by_id(rejected.found_item_id).await?;

        self.notifications.dispatch(NotificationIntent::claim_rejected(
            &rejected,
            &label_for(item.as_ref()),
        ));
        Ok(rejected)
    }
}
