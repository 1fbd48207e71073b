//! Database migrations for the AdBoard demo-data seeder.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_07_01_000001_create_channels;
mod m2025_07_01_000002_create_payments;
mod m2025_07_01_000003_create_integrations;
mod m2025_07_01_000004_create_ord_integrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_07_01_000001_create_channels::Migration),
            Box::new(m2025_07_01_000002_create_payments::Migration),
            Box::new(m2025_07_01_000003_create_integrations::Migration),
            Box::new(m2025_07_01_000004_create_ord_integrations::Migration),
        ]
    }
}
