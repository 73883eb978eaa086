use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claims::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Claims::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Claims::FoundItemId).uuid().not_null())
                    .col(ColumnDef::new(Claims::ReporterId).uuid().not_null())
                    .col(ColumnDef::new(Claims::ClaimantId).uuid().not_null())
                    .col(ColumnDef::new(Claims::ClaimantName).string().not_null())
                    .col(ColumnDef::new(Claims::ClaimantContact).string().not_null())
                    .col(ColumnDef::new(Claims::Description).text().not_null())
                    .col(ColumnDef::new(Claims::ProofImageUrl).string())
                    .col(ColumnDef::new(Claims::AdditionalInfo).text())
                    .col(
                        ColumnDef::new(Claims::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Claims::RejectionFeedback).text())
                    .col(
                        ColumnDef::new(Claims::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Claims::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One claim per claimant per item.
        manager
            .create_index(
                Index::create()
                    .table(Claims::Table)
                    .col(Claims::FoundItemId)
                    .col(Claims::ClaimantId)
                    .unique()
                    .name("uq_claims_found_item_id_claimant_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Claims::Table)
                    .col(Claims::ClaimantId)
                    .name("idx_claims_claimant_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Claims::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Claims {
    Table,
    Id,
    FoundItemId,
    ReporterId,
    ClaimantId,
    ClaimantName,
    ClaimantContact,
    Description,
    ProofImageUrl,
    AdditionalInfo,
    Status,
    RejectionFeedback,
    CreatedAt,
    UpdatedAt,
}
