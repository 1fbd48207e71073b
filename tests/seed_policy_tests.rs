//! Error-policy tests using in-memory fake stores.
//!
//! The generator only depends on the store traits, so these tests swap the
//! SeaORM repositories for fakes to exercise the best-effort and strict
//! policies without a database.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use adboard_seeder::error::SeedError;
use adboard_seeder::models::{channel, integration, payment};
use adboard_seeder::repositories::{
    ChannelStore, IntegrationStore, OrdIntegrationStore, PaymentStore,
};
use adboard_seeder::seeds::{PAYMENT_SEED_COUNT, SeedGenerator, SeedPolicy};

/// Channel store whose writes always fail, as if the table were missing.
struct FailingChannelStore;

#[async_trait]
impl ChannelStore for FailingChannelStore {
    async fn save_many(&self, _rows: Vec<channel::ActiveModel>) -> Result<()> {
        Err(anyhow!("channels table unavailable"))
    }

    async fn find_all(&self) -> Result<Vec<channel::Model>> {
        Ok(Vec::new())
    }

    async fn delete_all(&self) -> Result<u64> {
        Ok(0)
    }
}

#[derive(Default)]
struct MemoryPaymentStore {
    rows: Mutex<Vec<payment::Model>>,
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn save_many(&self, rows: Vec<payment::ActiveModel>) -> Result<()> {
        let mut stored = self.rows.lock().unwrap();
        for row in rows {
            let id = stored.len() as i32 + 1;
            stored.push(payment::Model {
                id,
                price: row.price.unwrap(),
                is_nds: row.is_nds.unwrap(),
            });
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<payment::Model>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut stored = self.rows.lock().unwrap();
        let removed = stored.len() as u64;
        stored.clear();
        Ok(removed)
    }
}

#[derive(Default)]
struct MemoryIntegrationStore {
    rows: Mutex<Vec<integration::Model>>,
}

#[async_trait]
impl IntegrationStore for MemoryIntegrationStore {
    async fn save_many(&self, rows: Vec<integration::ActiveModel>) -> Result<()> {
        let mut stored = self.rows.lock().unwrap();
        for row in rows {
            let id = stored.len() as i32 + 1;
            stored.push(integration::Model {
                id,
                channel_id: row.channel_id.unwrap(),
                payment_id: row.payment_id.unwrap(),
                integration_date: row.integration_date.unwrap(),
                views: row.views.unwrap(),
                status: row.status.unwrap(),
                erid_token: row.erid_token.unwrap(),
                comment: row.comment.unwrap(),
            });
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<integration::Model>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn delete_all(&self) -> Result<u64> {
        let mut stored = self.rows.lock().unwrap();
        let removed = stored.len() as u64;
        stored.clear();
        Ok(removed)
    }
}

/// Ord store recording whether its delete path ran.
#[derive(Default)]
struct FlagOrdStore {
    cleared: AtomicBool,
}

#[async_trait]
impl OrdIntegrationStore for FlagOrdStore {
    async fn delete_all(&self) -> Result<u64> {
        self.cleared.store(true, Ordering::SeqCst);
        Ok(0)
    }
}

/// Payment store whose delete path fails mid-cleanup.
#[derive(Default)]
struct FailingDeletePaymentStore;

#[async_trait]
impl PaymentStore for FailingDeletePaymentStore {
    async fn save_many(&self, _rows: Vec<payment::ActiveModel>) -> Result<()> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<payment::Model>> {
        Ok(Vec::new())
    }

    async fn delete_all(&self) -> Result<u64> {
        Err(anyhow!("payments table locked"))
    }
}

/// Channel store recording whether its delete path ran.
#[derive(Default)]
struct FlagChannelStore {
    cleared: AtomicBool,
}

#[async_trait]
impl ChannelStore for FlagChannelStore {
    async fn save_many(&self, _rows: Vec<channel::ActiveModel>) -> Result<()> {
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<channel::Model>> {
        Ok(Vec::new())
    }

    async fn delete_all(&self) -> Result<u64> {
        self.cleared.store(true, Ordering::SeqCst);
        Ok(0)
    }
}

#[tokio::test]
async fn best_effort_continues_past_a_failing_step() {
    let payments = Arc::new(MemoryPaymentStore::default());
    let integrations = Arc::new(MemoryIntegrationStore::default());
    let generator = SeedGenerator::new(
        Arc::new(FailingChannelStore),
        payments.clone(),
        integrations.clone(),
        Arc::new(FlagOrdStore::default()),
    );

    generator
        .generate_seeds(SeedPolicy::BestEffort)
        .await
        .expect("best effort never fails the sequence");

    // Payments landed even though channels failed; a partial seed is the
    // documented end state under this policy.
    assert_eq!(
        payments.find_all().await.unwrap().len(),
        PAYMENT_SEED_COUNT
    );
    // Integrations saw no channels and were skipped.
    assert!(integrations.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn strict_propagates_the_first_failure() {
    let payments = Arc::new(MemoryPaymentStore::default());
    let generator = SeedGenerator::new(
        Arc::new(FailingChannelStore),
        payments.clone(),
        Arc::new(MemoryIntegrationStore::default()),
        Arc::new(FlagOrdStore::default()),
    );

    let err = generator
        .generate_seeds(SeedPolicy::Strict)
        .await
        .expect_err("strict must surface the channel failure");
    assert!(format!("{err:#}").contains("channels"));

    // The sequence stopped before the payment step.
    assert!(payments.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn cleanup_failure_propagates_and_leaves_partial_deletion() {
    let ord = Arc::new(FlagOrdStore::default());
    let channels = Arc::new(FlagChannelStore::default());
    let generator = SeedGenerator::new(
        channels.clone(),
        Arc::new(FailingDeletePaymentStore),
        Arc::new(MemoryIntegrationStore::default()),
        ord.clone(),
    );

    let err = generator
        .clear_all_data()
        .await
        .expect_err("cleanup failure must reach the caller");
    assert!(matches!(err, SeedError::Cleanup { .. }));
    assert_eq!(err.to_string(), "database cleanup failed");

    // Children were already removed before the payment step failed; the
    // parent channels step never ran.
    assert!(ord.cleared.load(Ordering::SeqCst));
    assert!(!channels.cleared.load(Ordering::SeqCst));
}
