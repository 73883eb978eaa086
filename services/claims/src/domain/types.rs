use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use lostfound_domain::category::ItemCategory;
use lostfound_domain::status::{ClaimStatus, ItemStatus, NotificationKind};

/// The authenticated caller, as carried in the session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: Uuid,
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoundItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ItemCategory,
    pub found_date: NaiveDate,
    pub found_location: String,
    pub reporter_id: Uuid,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub status: ItemStatus,
    /// Set together with `returned_date` when the item is resolved.
    pub returned_to: Option<String>,
    pub returned_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl FoundItem {
    pub fn is_reported_by(&self, user_id: Uuid) -> bool {
        self.reporter_id == user_id
    }

    /// Quoted title for notification text.
    pub fn label(&self) -> String {
        format!("\"{}\"", self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub id: Uuid,
    pub found_item_id: Uuid,
    /// Reporter of the item at claim time.
    pub reporter_id: Uuid,
    pub claimant_id: Uuid,
    pub claimant_name: String,
    pub claimant_contact: String,
    pub description: String,
    pub proof_image_url: Option<String>,
    pub additional_info: Option<String>,
    pub status: ClaimStatus,
    pub rejection_feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Only the item's reporter may approve or reject, even after the item is deleted.
    pub fn is_decided_by(&self, user_id: Uuid) -> bool {
        self.reporter_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub recipient_id: Uuid,
    pub claim_id: Option<Uuid>,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification waiting to be persisted by the background worker.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationIntent {
    pub recipient_id: Uuid,
    pub claim_id: Option<Uuid>,
    pub kind: NotificationKind,
    pub message: String,
}

impl NotificationIntent {
    /// Tell the reporter someone claimed their item.
    pub fn claim_received(item: &FoundItem, claim: &Claim) -> Self {
        Self {
            recipient_id: item.reporter_id,
            claim_id: Some(claim.id),
            kind: NotificationKind::ClaimReceived,
            message: format!(
                "{} submitted a claim for {}.",
                claim.claimant_name,
                item.label()
            ),
        }
    }

    pub fn claim_approved(claim: &Claim, item_label: &str) -> Self {
        Self {
            recipient_id: claim.claimant_id,
            claim_id: Some(claim.id),
            kind: NotificationKind::ClaimApproved,
            message: format!("Your claim for {item_label} has been approved."),
        }
    }

    pub fn claim_rejected(claim: &Claim, item_label: &str) -> Self {
        let feedback = claim
            .rejection_feedback
            .as_deref()
            .unwrap_or(DEFAULT_REJECTION_FEEDBACK);
        Self {
            recipient_id: claim.claimant_id,
            claim_id: Some(claim.id),
            kind: NotificationKind::ClaimRejected,
            message: format!("Your claim for {item_label} has been rejected. {feedback}"),
        }
    }

    pub fn into_notification(self, id: Uuid, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id,
            recipient_id: self.recipient_id,
            claim_id: self.claim_id,
            message: self.message,
            kind: self.kind,
            is_read: false,
            created_at,
        }
    }
}

/// Uploaded proof-of-ownership image.
#[derive(Debug, Clone)]
pub struct ProofImage {
    pub content_type: String,
    pub bytes: Bytes,
}

impl ProofImage {
    pub fn is_image(&self) -> bool {
        self.content_type
            .split(';')
            .next()
            .is_some_and(|mime| mime.trim().to_ascii_lowercase().starts_with("image/"))
    }
}

/// Input to the atomic approval write.
#[derive(Debug, Clone)]
pub struct ApprovalRequest {
    pub claim_id: Uuid,
    pub found_item_id: Uuid,
    /// `false` when the item could not be loaded; siblings are still rejected.
    pub resolve_item: bool,
    pub returned_to: String,
    pub decided_at: DateTime<Utc>,
}

/// Everything the approval transaction changed.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    pub approved: Claim,
    pub auto_rejected: Vec<Claim>,
    pub item: Option<FoundItem>,
}

/// Per-claim scoring result. `Failed` claims are left out of the ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClaimScore {
    Scored(f64),
    Failed,
}

#[derive(Debug, Clone)]
pub struct ScoredClaim {
    pub claim: Claim,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct RankingReport {
    pub found_item_id: Uuid,
    pub total_claims: usize,
    pub scored_claims: usize,
    /// Highest score first.
    pub ranked: Vec<ScoredClaim>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("similarity service unreachable: {0}")]
    Unreachable(String),
    #[error("scoring failed: {0}")]
    Failed(String),
}

/// Feedback written onto sibling claims when another claim is approved.
pub const AUTO_REJECTION_FEEDBACK: &str = "Your description didn't match with the item.";

pub const DEFAULT_REJECTION_FEEDBACK: &str = "Your claim has been rejected.";

/// Notification label when the claimed item no longer exists.
pub const FALLBACK_ITEM_LABEL: &str = "the item";
