//! Migration to create the ord_integrations table.
//!
//! Rows are written by the ORD export flow, not by the seeder; the seeder
//! only needs the table to exist so clear-all can empty it first.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrdIntegrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrdIntegrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrdIntegrations::IntegrationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrdIntegrations::EridToken).text().not_null())
                    .col(
                        ColumnDef::new(OrdIntegrations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(OrdIntegrations::Table, OrdIntegrations::IntegrationId)
                            .to(Integrations::Table, Integrations::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrdIntegrations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrdIntegrations {
    Table,
    Id,
    IntegrationId,
    EridToken,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Integrations {
    Table,
    Id,
}
