#![allow(async_fn_in_trait)]

use uuid::Uuid;

use lostfound_domain::category::ItemCategory;

use crate::domain::types::{
    ApprovalOutcome, ApprovalRequest, Claim, FoundItem, Notification, NotificationIntent,
    ProofImage, ScoringError,
};
use crate::error::ClaimsServiceError;

/// Repository for reported found items.
pub trait FoundItemRepository: Send + Sync {
    async fn create(&self, item: &FoundItem) -> Result<(), ClaimsServiceError>;

    /// Newest first, optionally narrowed to one category.
    async fn list(
        &self,
        category: Option<ItemCategory>,
    ) -> Result<Vec<FoundItem>, ClaimsServiceError>;

    /// Newest first.
    async fn list_by_reporter(&self, reporter_id: Uuid)
    -> Result<Vec<FoundItem>, ClaimsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoundItem>, ClaimsServiceError>;

    /// Delete the item only while it is still pending. Returns `false` otherwise.
    async fn delete_pending(&self, id: Uuid) -> Result<bool, ClaimsServiceError>;
}

/// Repository for claims.
pub trait ClaimRepository: Send + Sync {
    /// Fails with `DuplicateClaim` if the claimant already claimed the item.
    async fn create(&self, claim: &Claim) -> Result<(), ClaimsServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Claim>, ClaimsServiceError>;

    /// Newest first.
    async fn list_by_found_item(
        &self,
        found_item_id: Uuid,
    ) -> Result<Vec<Claim>, ClaimsServiceError>;

    /// Newest first.
    async fn list_by_claimant(&self, claimant_id: Uuid) -> Result<Vec<Claim>, ClaimsServiceError>;

    async fn exists_for(
        &self,
        found_item_id: Uuid,
        claimant_id: Uuid,
    ) -> Result<bool, ClaimsServiceError>;

    /// Compare-and-set `pending` → `rejected`. `None` if the claim was not pending.
    async fn reject_pending(
        &self,
        id: Uuid,
        feedback: &str,
    ) -> Result<Option<Claim>, ClaimsServiceError>;
}

/// The multi-row approval write, applied atomically.
pub trait ResolutionRepository: Send + Sync {
    /// In one transaction: approve the claim if still pending, reject every other
    /// pending claim on the item, and resolve the item if `resolve_item` is set
    /// and it is still pending. Any lost compare-and-set rolls everything back
    /// with `ClaimAlreadyDecided` or `ItemNotPending`.
    async fn approve(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalOutcome, ClaimsServiceError>;
}

/// Per-recipient notification inbox.
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &Notification) -> Result<(), ClaimsServiceError>;

    /// Newest first.
    async fn list_for(&self, recipient_id: Uuid)
    -> Result<Vec<Notification>, ClaimsServiceError>;

    /// Returns the number of notifications flipped to read (0 or 1).
    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> Result<u64, ClaimsServiceError>;

    /// Returns the number of notifications flipped to read.
    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64, ClaimsServiceError>;
}

/// Fire-and-forget hand-off of notification intents. Never fails the caller.
pub trait NotificationDispatcher: Send + Sync {
    fn dispatch(&self, intent: NotificationIntent);
}

/// Storage for proof images. Returns the public URL of the stored file.
pub trait ImageStore: Send + Sync {
    async fn store(&self, image: ProofImage) -> Result<String, ClaimsServiceError>;

    /// Remove a file previously returned by `store`. Missing files are not an error.
    async fn discard(&self, url: &str) -> Result<(), ClaimsServiceError>;
}

/// External text-similarity scorer.
pub trait SimilarityScorer: Send + Sync {
    /// Check the service is reachable before any scoring.
    async fn connect(&self) -> Result<(), ScoringError>;

    async fn score(&self, source: &str, candidate: &str) -> Result<f64, ScoringError>;
}
