//! Integration repository for database operations.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::models::integration::{self, Entity as Integration};
use crate::repositories::IntegrationStore;

/// Repository for integration database operations.
#[derive(Debug, Clone)]
pub struct IntegrationRepository {
    pub db: Arc<DatabaseConnection>,
}

impl IntegrationRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IntegrationStore for IntegrationRepository {
    async fn save_many(&self, rows: Vec<integration::ActiveModel>) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        Integration::insert_many(rows).exec(&*self.db).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<integration::Model>> {
        let integrations = Integration::find()
            .order_by_asc(integration::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(integrations)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = Integration::delete_many().exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}
