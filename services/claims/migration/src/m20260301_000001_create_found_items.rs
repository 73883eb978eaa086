use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoundItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FoundItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FoundItems::Title).string().not_null())
                    .col(ColumnDef::new(FoundItems::Description).text().not_null())
                    .col(ColumnDef::new(FoundItems::Category).string().not_null())
                    .col(ColumnDef::new(FoundItems::FoundDate).date().not_null())
                    .col(ColumnDef::new(FoundItems::FoundLocation).string().not_null())
                    .col(ColumnDef::new(FoundItems::ReporterId).uuid().not_null())
                    .col(ColumnDef::new(FoundItems::ReporterName).string().not_null())
                    .col(ColumnDef::new(FoundItems::ReporterContact).string().not_null())
                    .col(
                        ColumnDef::new(FoundItems::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(FoundItems::ReturnedTo).string())
                    .col(ColumnDef::new(FoundItems::ReturnedDate).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(FoundItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(FoundItems::Table)
                    .col(FoundItems::ReporterId)
                    .name("idx_found_items_reporter_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(FoundItems::Table)
                    .col(FoundItems::Category)
                    .col(FoundItems::CreatedAt)
                    .name("idx_found_items_category_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoundItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FoundItems {
    Table,
    Id,
    Title,
    Description,
    Category,
    FoundDate,
    FoundLocation,
    ReporterId,
    ReporterName,
    ReporterContact,
    Status,
    ReturnedTo,
    ReturnedDate,
    CreatedAt,
}
