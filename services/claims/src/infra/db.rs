use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, RuntimeErr, SqlErr, TransactionError,
    TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use lostfound_claims_schema::{claims, found_items, notifications};
use lostfound_domain::category::ItemCategory;
use lostfound_domain::status::{ClaimStatus, ItemStatus, NotificationKind};

use crate::domain::repository::{
    ClaimRepository, FoundItemRepository, NotificationRepository, ResolutionRepository,
};
use crate::domain::types::{
    AUTO_REJECTION_FEEDBACK, ApprovalOutcome, ApprovalRequest, Claim, FoundItem, Notification,
};
use crate::error::ClaimsServiceError;

// ── FoundItem repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFoundItemRepository {
    pub db: DatabaseConnection,
}

impl FoundItemRepository for DbFoundItemRepository {
    async fn create(&self, item: &FoundItem) -> Result<(), ClaimsServiceError> {
        found_items::ActiveModel {
            id: Set(item.id),
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
            category: Set(item.category.as_str().to_owned()),
            found_date: Set(item.found_date),
            found_location: Set(item.found_location.clone()),
            reporter_id: Set(item.reporter_id),
            reporter_name: Set(item.reporter_name.clone()),
            reporter_contact: Set(item.reporter_contact.clone()),
            status: Set(item.status.as_str().to_owned()),
            returned_to: Set(item.returned_to.clone()),
            returned_date: Set(item.returned_date),
            created_at: Set(item.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert found item")?;
        Ok(())
    }

    async fn list(
        &self,
        category: Option<ItemCategory>,
    ) -> Result<Vec<FoundItem>, ClaimsServiceError> {
        let mut query = found_items::Entity::find();
        if let Some(category) = category {
            query = query.filter(found_items::Column::Category.eq(category.as_str()));
        }
        let models = query
            .order_by_desc(found_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list found items")?;
        Ok(models
            .into_iter()
            .map(found_item_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn list_by_reporter(
        &self,
        reporter_id: Uuid,
    ) -> Result<Vec<FoundItem>, ClaimsServiceError> {
        let models = found_items::Entity::find()
            .filter(found_items::Column::ReporterId.eq(reporter_id))
            .order_by_desc(found_items::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list found items by reporter")?;
        Ok(models
            .into_iter()
            .map(found_item_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FoundItem>, ClaimsServiceError> {
        let model = found_items::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find found item by id")?;
        Ok(model.map(found_item_from_model).transpose()?)
    }

    async fn delete_pending(&self, id: Uuid) -> Result<bool, ClaimsServiceError> {
        let result = found_items::Entity::delete_many()
            .filter(found_items::Column::Id.eq(id))
            .filter(found_items::Column::Status.eq(ItemStatus::Pending.as_str()))
            .exec(&self.db)
            .await
            .context("delete pending found item")?;
        Ok(result.rows_affected > 0)
    }
}

fn found_item_from_model(model: found_items::Model) -> anyhow::Result<FoundItem> {
    Ok(FoundItem {
        category: model
            .category
            .parse::<ItemCategory>()
            .with_context(|| format!("found item {}", model.id))?,
        status: model
            .status
            .parse::<ItemStatus>()
            .with_context(|| format!("found item {}", model.id))?,
        id: model.id,
        title: model.title,
        description: model.description,
        found_date: model.found_date,
        found_location: model.found_location,
        reporter_id: model.reporter_id,
        reporter_name: model.reporter_name,
        reporter_contact: model.reporter_contact,
        returned_to: model.returned_to,
        returned_date: model.returned_date,
        created_at: model.created_at,
    })
}

// ── Claim repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClaimRepository {
    pub db: DatabaseConnection,
}

impl ClaimRepository for DbClaimRepository {
    async fn create(&self, claim: &Claim) -> Result<(), ClaimsServiceError> {
        claims::ActiveModel {
            id: Set(claim.id),
            found_item_id: Set(claim.found_item_id),
            reporter_id: Set(claim.reporter_id),
            claimant_id: Set(claim.claimant_id),
            claimant_name: Set(claim.claimant_name.clone()),
            claimant_contact: Set(claim.claimant_contact.clone()),
            description: Set(claim.description.clone()),
            proof_image_url: Set(claim.proof_image_url.clone()),
            additional_info: Set(claim.additional_info.clone()),
            status: Set(claim.status.as_str().to_owned()),
            rejection_feedback: Set(claim.rejection_feedback.clone()),
            created_at: Set(claim.created_at),
            updated_at: Set(claim.updated_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            // uq_claims_found_item_id_claimant_id
            Some(SqlErr::UniqueConstraintViolation(_)) => ClaimsServiceError::DuplicateClaim,
            _ => ClaimsServiceError::Internal(anyhow::Error::new(e).context("insert claim")),
        })?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Claim>, ClaimsServiceError> {
        let model = claims::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find claim by id")?;
        Ok(model.map(claim_from_model).transpose()?)
    }

    async fn list_by_found_item(
        &self,
        found_item_id: Uuid,
    ) -> Result<Vec<Claim>, ClaimsServiceError> {
        let models = claims::Entity::find()
            .filter(claims::Column::FoundItemId.eq(found_item_id))
            .order_by_desc(claims::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list claims by found item")?;
        Ok(claims_from_models(models)?)
    }

    async fn list_by_claimant(&self, claimant_id: Uuid) -> Result<Vec<Claim>, ClaimsServiceError> {
        let models = claims::Entity::find()
            .filter(claims::Column::ClaimantId.eq(claimant_id))
            .order_by_desc(claims::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list claims by claimant")?;
        Ok(claims_from_models(models)?)
    }

    async fn exists_for(
        &self,
        found_item_id: Uuid,
        claimant_id: Uuid,
    ) -> Result<bool, ClaimsServiceError> {
        let model = claims::Entity::find()
            .filter(claims::Column::FoundItemId.eq(found_item_id))
            .filter(claims::Column::ClaimantId.eq(claimant_id))
            .one(&self.db)
            .await
            .context("check existing claim")?;
        Ok(model.is_some())
    }

    async fn reject_pending(
        &self,
        id: Uuid,
        feedback: &str,
    ) -> Result<Option<Claim>, ClaimsServiceError> {
        let mut rows = claims::Entity::update_many()
            .col_expr(
                claims::Column::Status,
                Expr::value(ClaimStatus::Rejected.as_str()),
            )
            .col_expr(claims::Column::RejectionFeedback, Expr::value(feedback))
            .col_expr(claims::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(claims::Column::Id.eq(id))
            .filter(claims::Column::Status.eq(ClaimStatus::Pending.as_str()))
            .exec_with_returning(&self.db)
            .await
            .context("reject pending claim")?;
        Ok(rows.pop().map(claim_from_model).transpose()?)
    }
}

fn claim_from_model(model: claims::Model) -> anyhow::Result<Claim> {
    Ok(Claim {
        status: model
            .status
            .parse::<ClaimStatus>()
            .with_context(|| format!("claim {}", model.id))?,
        id: model.id,
        found_item_id: model.found_item_id,
        reporter_id: model.reporter_id,
        claimant_id: model.claimant_id,
        claimant_name: model.claimant_name,
        claimant_contact: model.claimant_contact,
        description: model.description,
        proof_image_url: model.proof_image_url,
        additional_info: model.additional_info,
        rejection_feedback: model.rejection_feedback,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn claims_from_models(models: Vec<claims::Model>) -> anyhow::Result<Vec<Claim>> {
    models.into_iter().map(claim_from_model).collect()
}

// ── Resolution repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResolutionRepository {
    pub db: DatabaseConnection,
}

/// Rolls the approval transaction back.
#[derive(Debug, thiserror::Error)]
enum ApprovalAbort {
    #[error("claim is no longer pending")]
    ClaimDecided,
    #[error("found item is no longer pending")]
    ItemResolved,
    #[error(transparent)]
    Db(#[from] DbErr),
}

struct ApprovalRows {
    approved: claims::Model,
    auto_rejected: Vec<claims::Model>,
    item: Option<found_items::Model>,
}

impl ResolutionRepository for DbResolutionRepository {
    async fn approve(
        &self,
        request: &ApprovalRequest,
    ) -> Result<ApprovalOutcome, ClaimsServiceError> {
        let request = request.clone();
        let rows = self
            .db
            .transaction::<_, ApprovalRows, ApprovalAbort>(|txn| {
                Box::pin(async move {
                    lock_for_approval(txn, request.found_item_id).await?;

                    let approved = claims::Entity::update_many()
                        .col_expr(
                            claims::Column::Status,
                            Expr::value(ClaimStatus::Approved.as_str()),
                        )
                        .col_expr(claims::Column::UpdatedAt, Expr::value(request.decided_at))
                        .filter(claims::Column::Id.eq(request.claim_id))
                        .filter(claims::Column::Status.eq(ClaimStatus::Pending.as_str()))
                        .exec_with_returning(txn)
                        .await?
                        .pop()
                        .ok_or(ApprovalAbort::ClaimDecided)?;

                    let auto_rejected = claims::Entity::update_many()
                        .col_expr(
                            claims::Column::Status,
                            Expr::value(ClaimStatus::Rejected.as_str()),
                        )
                        .col_expr(
                            claims::Column::RejectionFeedback,
                            Expr::value(AUTO_REJECTION_FEEDBACK),
                        )
                        .col_expr(claims::Column::UpdatedAt, Expr::value(request.decided_at))
                        .filter(claims::Column::FoundItemId.eq(request.found_item_id))
                        .filter(claims::Column::Id.ne(request.claim_id))
                        .filter(claims::Column::Status.eq(ClaimStatus::Pending.as_str()))
                        .exec_with_returning(txn)
                        .await?;

                    let item = if request.resolve_item {
                        let item = resolve_item(
                            txn,
                            request.found_item_id,
                            &request.returned_to,
                            request.decided_at,
                        )
                        .await?
                        .ok_or(ApprovalAbort::ItemResolved)?;
                        Some(item)
                    } else {
                        None
                    };

                    Ok(ApprovalRows {
                        approved,
                        auto_rejected,
                        item,
                    })
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Transaction(ApprovalAbort::ClaimDecided) => {
                    ClaimsServiceError::ClaimAlreadyDecided
                }
                TransactionError::Transaction(ApprovalAbort::ItemResolved) => {
                    ClaimsServiceError::ItemNotPending
                }
                TransactionError::Transaction(ApprovalAbort::Db(e))
                | TransactionError::Connection(e)
                    if is_contention(&e) =>
                {
                    ClaimsServiceError::ClaimAlreadyDecided
                }
                TransactionError::Transaction(ApprovalAbort::Db(e))
                | TransactionError::Connection(e) => {
                    ClaimsServiceError::Internal(anyhow::Error::new(e).context("approve claim"))
                }
            })?;

        Ok(ApprovalOutcome {
            approved: claim_from_model(rows.approved)?,
            auto_rejected: claims_from_models(rows.auto_rejected)?,
            item: rows.item.map(found_item_from_model).transpose()?,
        })
    }
}

/// Row locks taken before any write: the item first, then its claims by id.
/// Approvals on one item acquire them in the same order and run one at a time,
/// including when the item row is gone.
async fn lock_for_approval<C: ConnectionTrait>(
    conn: &C,
    found_item_id: Uuid,
) -> Result<(), DbErr> {
    found_items::Entity::find_by_id(found_item_id)
        .lock_exclusive()
        .one(conn)
        .await?;
    claims::Entity::find()
        .filter(claims::Column::FoundItemId.eq(found_item_id))
        .order_by_asc(claims::Column::Id)
        .lock_exclusive()
        .all(conn)
        .await?;
    Ok(())
}

/// Postgres deadlock (`40P01`) or serialization failure (`40001`).
fn is_contention(err: &DbErr) -> bool {
    let (DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e))) = err
    else {
        return false;
    };
    e.as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == "40P01" || code == "40001")
}

/// Compare-and-set the item to resolved. `None` if it was not pending.
async fn resolve_item<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
    returned_to: &str,
    returned_date: DateTime<Utc>,
) -> Result<Option<found_items::Model>, DbErr> {
    let mut rows = found_items::Entity::update_many()
        .col_expr(
            found_items::Column::Status,
            Expr::value(ItemStatus::Resolved.as_str()),
        )
        .col_expr(found_items::Column::ReturnedTo, Expr::value(returned_to))
        .col_expr(found_items::Column::ReturnedDate, Expr::value(returned_date))
        .filter(found_items::Column::Id.eq(id))
        .filter(found_items::Column::Status.eq(ItemStatus::Pending.as_str()))
        .exec_with_returning(conn)
        .await?;
    Ok(rows.pop())
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn create(&self, notification: &Notification) -> Result<(), ClaimsServiceError> {
        notifications::ActiveModel {
            id: Set(notification.id),
            recipient_id: Set(notification.recipient_id),
            claim_id: Set(notification.claim_id),
            message: Set(notification.message.clone()),
            kind: Set(notification.kind.as_str().to_owned()),
            is_read: Set(notification.is_read),
            created_at: Set(notification.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert notification")?;
        Ok(())
    }

    async fn list_for(
        &self,
        recipient_id: Uuid,
    ) -> Result<Vec<Notification>, ClaimsServiceError> {
        let models = notifications::Entity::find()
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list notifications")?;
        Ok(models
            .into_iter()
            .map(notification_from_model)
            .collect::<anyhow::Result<_>>()?)
    }

    async fn mark_read(&self, id: Uuid, recipient_id: Uuid) -> Result<u64, ClaimsServiceError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .filter(notifications::Column::Id.eq(id))
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .filter(notifications::Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .context("mark notification read")?;
        Ok(result.rows_affected)
    }

    async fn mark_all_read(&self, recipient_id: Uuid) -> Result<u64, ClaimsServiceError> {
        let result = notifications::Entity::update_many()
            .col_expr(notifications::Column::IsRead, Expr::value(true))
            .filter(notifications::Column::RecipientId.eq(recipient_id))
            .filter(notifications::Column::IsRead.eq(false))
            .exec(&self.db)
            .await
            .context("mark all notifications read")?;
        Ok(result.rows_affected)
    }
}

fn notification_from_model(model: notifications::Model) -> anyhow::Result<Notification> {
    Ok(Notification {
        kind: model
            .kind
            .parse::<NotificationKind>()
            .with_context(|| format!("notification {}", model.id))?,
        id: model.id,
        recipient_id: model.recipient_id,
        claim_id: model.claim_id,
        message: model.message,
        is_read: model.is_read,
        created_at: model.created_at,
    })
}
