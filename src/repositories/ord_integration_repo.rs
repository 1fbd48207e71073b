//! ORD integration repository for database operations.
//!
//! The seeder never creates ORD integrations; it only empties the table
//! ahead of the integrations it references.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;

use crate::models::ord_integration::Entity as OrdIntegration;
use crate::repositories::OrdIntegrationStore;

/// Repository for ORD integration database operations.
#[derive(Debug, Clone)]
pub struct OrdIntegrationRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OrdIntegrationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrdIntegrationStore for OrdIntegrationRepository {
    async fn delete_all(&self) -> Result<u64> {
        let result = OrdIntegration::delete_many().exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}
