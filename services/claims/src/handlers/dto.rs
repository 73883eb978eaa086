use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use lostfound_auth_types::token::SessionIdentity;
use lostfound_core::serde::{to_rfc3339_ms, to_rfc3339_ms_opt};
use lostfound_domain::category::ItemCategory;
use lostfound_domain::status::{ClaimStatus, ItemStatus, NotificationKind};

use crate::domain::types::{Actor, Claim, FoundItem, Notification, RankingReport};

pub fn actor(identity: &SessionIdentity) -> Actor {
    Actor {
        id: identity.user_id,
        name: identity.full_name.clone(),
        contact: identity.contact_number.clone(),
    }
}

#[derive(Debug, Serialize)]
pub struct FoundItemResponse {
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
    pub returned_to: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms_opt")]
    pub returned_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<FoundItem> for FoundItemResponse {
    fn from(item: FoundItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            found_date: item.found_date,
            found_location: item.found_location,
            reporter_id: item.reporter_id,
            reporter_name: item.reporter_name,
            reporter_contact: item.reporter_contact,
            status: item.status,
            returned_to: item.returned_to,
            returned_date: item.returned_date,
            created_at: item.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: Uuid,
    pub found_item_id: Uuid,
    pub claimant_id: Uuid,
    pub claimant_name: String,
    pub claimant_contact: String,
    pub description: String,
    pub proof_image_url: Option<String>,
    pub additional_info: Option<String>,
    pub status: ClaimStatus,
    pub rejection_feedback: Option<String>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            found_item_id: claim.found_item_id,
            claimant_id: claim.claimant_id,
            claimant_name: claim.claimant_name,
            claimant_contact: claim.claimant_contact,
            description: claim.description,
            proof_image_url: claim.proof_image_url,
            additional_info: claim.additional_info,
            status: claim.status,
            rejection_feedback: claim.rejection_feedback,
            created_at: claim.created_at,
            updated_at: claim.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub claim_id: Option<Uuid>,
    pub message: String,
    pub kind: NotificationKind,
    pub is_read: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            claim_id: n.claim_id,
            message: n.message,
            kind: n.kind,
            is_read: n.is_read,
            created_at: n.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct RankedClaimResponse {
    pub claim: ClaimResponse,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub found_item_id: Uuid,
    pub total_claims: usize,
    pub scored_claims: usize,
    pub ranked: Vec<RankedClaimResponse>,
}

impl From<RankingReport> for RankingResponse {
    fn from(report: RankingReport) -> Self {
        Self {
            found_item_id: report.found_item_id,
            total_claims: report.total_claims,
            scored_claims: report.scored_claims,
            ranked: report
                .ranked
                .into_iter()
                .map(|r| RankedClaimResponse {
                    claim: r.claim.into(),
                    score: r.score,
                })
                .collect(),
        }
    }
}

pub fn collect<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
