//! Payment repository for database operations.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::models::payment::{self, Entity as Payment};
use crate::repositories::PaymentStore;

/// Repository for payment database operations.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PaymentRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PaymentStore for PaymentRepository {
    async fn save_many(&self, rows: Vec<payment::ActiveModel>) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        Payment::insert_many(rows).exec(&*self.db).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<payment::Model>> {
        let payments = Payment::find()
            .order_by_asc(payment::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(payments)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = Payment::delete_many().exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}
