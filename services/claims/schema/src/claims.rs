use sea_orm::entity::prelude::*;

/// Ownership claim against a found item. No foreign key to `found_items`:
/// claims outlive a deleted item and are never cascaded. `reporter_id` is
/// copied from the item so decisions stay authorised after it is gone.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "claims")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub found_item_id: Uuid,
    pub reporter_id: Uuid,
    pub claimant_id: Uuid,
    pub claimant_name: String,
    pub claimant_contact: String,
    pub description: String,
    pub proof_image_url: Option<String>,
    pub additional_info: Option<String>,
    pub status: String,
    pub rejection_feedback: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
