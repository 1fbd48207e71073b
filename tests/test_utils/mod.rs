//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations for testing purposes.

use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    // SQLite does not enforce our Postgres foreign key semantics; disable FK
    // checks so fixture rows can be inserted without the full parent chain.
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = OFF".to_string(),
    ))
    .await?;

    Ok(db)
}

/// Inserts an ORD integration row directly, as the export flow would.
#[allow(dead_code)]
pub async fn insert_ord_integration(
    db: &DatabaseConnection,
    integration_id: i32,
    erid_token: &str,
) -> Result<()> {
    let stmt = Statement::from_string(
        db.get_database_backend(),
        format!(
            "INSERT INTO ord_integrations (integration_id, erid_token, created_at) \
             VALUES ({}, '{}', CURRENT_TIMESTAMP)",
            integration_id, erid_token
        ),
    );
    db.execute(stmt).await?;
    Ok(())
}
