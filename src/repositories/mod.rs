//! # Repository Layer
//!
//! Repository implementations that encapsulate SeaORM operations for the
//! seeded entities. The seeder itself depends only on the store traits
//! below, so tests can substitute in-memory fakes for the database-backed
//! repositories.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{channel, integration, payment};

pub mod channel_repo;
pub mod integration_repo;
pub mod ord_integration_repo;
pub mod payment_repo;

pub use channel_repo::ChannelRepository;
pub use integration_repo::IntegrationRepository;
pub use ord_integration_repo::OrdIntegrationRepository;
pub use payment_repo::PaymentRepository;

/// Persistence operations for channels.
#[async_trait]
pub trait ChannelStore: Send + Sync {
    /// Inserts the given rows as a single batch.
    async fn save_many(&self, rows: Vec<channel::ActiveModel>) -> Result<()>;

    /// Returns every stored channel.
    async fn find_all(&self) -> Result<Vec<channel::Model>>;

    /// Deletes every stored channel, returning the number of rows removed.
    async fn delete_all(&self) -> Result<u64>;
}

/// Persistence operations for payments.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn save_many(&self, rows: Vec<payment::ActiveModel>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<payment::Model>>;

    async fn delete_all(&self) -> Result<u64>;
}

/// Persistence operations for integrations.
#[async_trait]
pub trait IntegrationStore: Send + Sync {
    async fn save_many(&self, rows: Vec<integration::ActiveModel>) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<integration::Model>>;

    async fn delete_all(&self) -> Result<u64>;
}

/// Persistence operations for ORD integrations.
///
/// Rows are created by the ORD export flow, not by the seeder, so only the
/// delete path is needed here.
#[async_trait]
pub trait OrdIntegrationStore: Send + Sync {
    async fn delete_all(&self) -> Result<u64>;
}
