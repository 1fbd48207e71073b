//! Migration to create the integrations table.
//!
//! An integration links a channel and a payment into a sponsored-placement
//! deal, with its performance metrics and regulatory ERID marker.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Integrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Integrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Integrations::ChannelId).integer().not_null())
                    .col(ColumnDef::new(Integrations::PaymentId).integer().not_null())
                    .col(
                        ColumnDef::new(Integrations::IntegrationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Integrations::Views).integer().not_null())
                    .col(ColumnDef::new(Integrations::Status).text().not_null())
                    .col(ColumnDef::new(Integrations::EridToken).text().not_null())
                    .col(ColumnDef::new(Integrations::Comment).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Integrations::Table, Integrations::ChannelId)
                            .to(Channels::Table, Channels::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Integrations::Table, Integrations::PaymentId)
                            .to(Payments::Table, Payments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Integrations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Integrations {
    Table,
    Id,
    ChannelId,
    PaymentId,
    IntegrationDate,
    Views,
    Status,
    EridToken,
    Comment,
}

#[derive(DeriveIden)]
enum Channels {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
}
