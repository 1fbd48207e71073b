//! Channel repository for database operations.
//!
//! This module provides the ChannelRepository struct which encapsulates
//! SeaORM operations for the channels table.

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::models::channel::{self, Entity as Channel};
use crate::repositories::ChannelStore;

/// Repository for channel database operations.
#[derive(Debug, Clone)]
pub struct ChannelRepository {
    /// Database connection pool
    pub db: Arc<DatabaseConnection>,
}

impl ChannelRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ChannelStore for ChannelRepository {
    async fn save_many(&self, rows: Vec<channel::ActiveModel>) -> Result<()> {
        // insert_many rejects an empty batch
        if rows.is_empty() {
            return Ok(());
        }
        Channel::insert_many(rows).exec(&*self.db).await?;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<channel::Model>> {
        let channels = Channel::find()
            .order_by_asc(channel::Column::Id)
            .all(&*self.db)
            .await?;
        Ok(channels)
    }

    async fn delete_all(&self) -> Result<u64> {
        let result = Channel::delete_many().exec(&*self.db).await?;
        Ok(result.rows_affected)
    }
}
