use sea_orm::entity::prelude::*;

/// Reported found item. `status` is `pending` or `resolved`; the `returned_*`
/// columns are filled exactly when it is resolved.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "found_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub found_date: Date,
    pub found_location: String,
    pub reporter_id: Uuid,
    pub reporter_name: String,
    pub reporter_contact: String,
    pub status: String,
    pub returned_to: Option<String>,
    pub returned_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
