use chrono::Utc;
use uuid::Uuid;

use lostfound_domain::category::ItemCategory;
use lostfound_domain::status::ItemStatus;

use crate::domain::repository::FoundItemRepository;
use crate::domain::types::{Actor, FoundItem};
use crate::error::ClaimsServiceError;
use crate::usecase::validate;

/// Parse an optional `?category=` filter. Blank means no filter.
pub fn parse_category(raw: Option<&str>) -> Result<Option<ItemCategory>, ClaimsServiceError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ClaimsServiceError::UnknownCategory(value.to_owned())),
    }
}

// ── CreateFoundItem ──────────────────────────────────────────────────────────

pub struct CreateFoundItemInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub found_date: String,
    pub found_location: String,
}

pub struct CreateFoundItemUseCase<I: FoundItemRepository> {
    pub items: I,
}

impl<I: FoundItemRepository> CreateFoundItemUseCase<I> {
    pub async fn execute(
        &self,
        reporter: &Actor,
        input: CreateFoundItemInput,
    ) -> Result<FoundItem, ClaimsServiceError> {
        let title = validate::text("title", &input.title)?;
        let description = validate::text("description", &input.description)?;
        let category = parse_category(Some(input.category.as_str()))?
            .ok_or(ClaimsServiceError::InvalidField("category"))?;
        let found_date = validate::date("found_date", &input.found_date)?;
        let found_location = validate::text("found_location", &input.found_location)?;

        let item = FoundItem {
            id: Uuid::now_v7(),
            title,
            description,
            category,
            found_date,
            found_location,
            reporter_id: reporter.id,
            reporter_name: reporter.name.clone(),
            reporter_contact: reporter.contact.clone(),
            status: ItemStatus::Pending,
            returned_to: None,
            returned_date: None,
            created_at: Utc::now(),
        };
        self.items.create(&item).await?;
        Ok(item)
    }
}

// ── ListFoundItems ───────────────────────────────────────────────────────────

pub struct ListFoundItemsUseCase<I: FoundItemRepository> {
    pub items: I,
}

impl<I: FoundItemRepository> ListFoundItemsUseCase<I> {
    pub async fn execute(
        &self,
        category: Option<ItemCategory>,
    ) -> Result<Vec<FoundItem>, ClaimsServiceError> {
        self.items.list(category).await
    }
}

// ── ListMyFoundItems ─────────────────────────────────────────────────────────

pub struct ListMyFoundItemsUseCase<I: FoundItemRepository> {
    pub items: I,
}

impl<I: FoundItemRepository> ListMyFoundItemsUseCase<I> {
    pub async fn execute(&self, reporter_id: Uuid) -> Result<Vec<FoundItem>, ClaimsServiceError> {
        self.items.list_by_reporter(reporter_id).await
    }
}

// ── GetFoundItem ─────────────────────────────────────────────────────────────

pub struct GetFoundItemUseCase<I: FoundItemRepository> {
    pub items: I,
}

impl<I: FoundItemRepository> GetFoundItemUseCase<I> {
    pub async fn execute(&self, id: Uuid) -> Result<FoundItem, ClaimsServiceError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or(ClaimsServiceError::FoundItemNotFound)
    }
}

// ── DeleteFoundItem ──────────────────────────────────────────────────────────

pub struct DeleteFoundItemUseCase<I: FoundItemRepository> {
    pub items: I,
}

impl<I: FoundItemRepository> DeleteFoundItemUseCase<I> {
    /// Only the reporter may delete, and only while nothing has been handed back.
    pub async fn execute(&self, id: Uuid, requester_id: Uuid) -> Result<(), ClaimsServiceError> {
        let item = self
            .items
            .find_by_id(id)
            .await?
            .ok_or(ClaimsServiceError::FoundItemNotFound)?;
        if !item.is_reported_by(requester_id) {
            return Err(ClaimsServiceError::NotItemReporter);
        }
        if item.status != ItemStatus::Pending {
            return Err(ClaimsServiceError::ItemNotPending);
        }
        // Resolved between the read and the delete.
        if !self.items.delete_pending(id).await? {
            return Err(ClaimsServiceError::ItemNotPending);
        }
        Ok(())
    }
}
