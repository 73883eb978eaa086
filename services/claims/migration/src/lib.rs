use sea_orm_migration::prelude::*;

mod m20260301_000001_create_found_items;
mod m20260301_000002_create_claims;
mod m20260301_000003_create_notifications;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_found_items::Migration),
            Box::new(m20260301_000002_create_claims::Migration),
            Box::new(m20260301_000003_create_notifications::Migration),
        ]
    }
}
