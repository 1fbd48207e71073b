//! Demo-data generation and teardown.
//!
//! The generator writes a fixed set of channels, randomized payments and
//! randomized integrations through the store traits, strictly in that order
//! because integrations reference already-persisted channels and payments.
//! `clear_all_data` removes everything again, children before parents.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::Rng;
use sea_orm::{DatabaseConnection, Set};
use std::sync::Arc;

use crate::error::SeedError;
use crate::fixtures::creatives;
use crate::models::channel::{self, ChannelStatus, ChannelType};
use crate::models::integration::{self, IntegrationStatus};
use crate::models::payment;
use crate::repositories::{
    ChannelRepository, ChannelStore, IntegrationRepository, IntegrationStore,
    OrdIntegrationRepository, OrdIntegrationStore, PaymentRepository, PaymentStore,
};

/// Number of fixed channel rows inserted per run.
pub const CHANNEL_SEED_COUNT: usize = 6;
/// Number of randomized payment rows inserted per run.
pub const PAYMENT_SEED_COUNT: usize = 20;
/// Number of randomized integration rows inserted per run.
pub const INTEGRATION_SEED_COUNT: usize = 20;

/// How `generate_seeds` reacts when one of its steps fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedPolicy {
    /// Log the error and continue with the next step. A partial seed (for
    /// example payments inserted while channels failed) is a reachable end
    /// state under this policy.
    #[default]
    BestEffort,
    /// Propagate the first failure to the caller.
    Strict,
}

/// Seeds demo data through injected stores and clears it again.
pub struct SeedGenerator {
    channels: Arc<dyn ChannelStore>,
    payments: Arc<dyn PaymentStore>,
    integrations: Arc<dyn IntegrationStore>,
    ord_integrations: Arc<dyn OrdIntegrationStore>,
}

impl SeedGenerator {
    /// Creates a generator over explicit store implementations.
    pub fn new(
        channels: Arc<dyn ChannelStore>,
        payments: Arc<dyn PaymentStore>,
        integrations: Arc<dyn IntegrationStore>,
        ord_integrations: Arc<dyn OrdIntegrationStore>,
    ) -> Self {
        Self {
            channels,
            payments,
            integrations,
            ord_integrations,
        }
    }

    /// Wires the SeaORM repositories over a shared connection pool.
    pub fn with_database(db: Arc<DatabaseConnection>) -> Self {
        Self::new(
            Arc::new(ChannelRepository::new(db.clone())),
            Arc::new(PaymentRepository::new(db.clone())),
            Arc::new(IntegrationRepository::new(db.clone())),
            Arc::new(OrdIntegrationRepository::new(db)),
        )
    }

    /// Inserts the fixed list of demo channels.
    ///
    /// Re-running appends another copy of the list; there is no dedup key.
    pub async fn seed_channels(&self) -> Result<()> {
        let rows = vec![
            demo_channel(
                "Бобр Добр",
                ChannelType::Youtube,
                ChannelStatus::Released,
                "https://youtube.com/BoberKurwa",
            ),
            demo_channel(
                "Смешные утята",
                ChannelType::Telegram,
                ChannelStatus::ToWork,
                "https://t.me/DucksAndDucks",
            ),
            demo_channel(
                "Санта-барбара",
                ChannelType::VkVideo,
                ChannelStatus::Released,
                "https://vk-video.com/santaBarbara",
            ),
            demo_channel(
                "Плюс +15000",
                ChannelType::Telegram,
                ChannelStatus::ToWork,
                "https://t.me/plus15000",
            ),
            demo_channel(
                "Сваты онлайн",
                ChannelType::VkVideo,
                ChannelStatus::Released,
                "https://vk-video.com/SVATY_ONLINE",
            ),
            demo_channel(
                "MR BEAST",
                ChannelType::Youtube,
                ChannelStatus::Released,
                "https://youtube.com/mrbeast",
            ),
        ];

        self.channels
            .save_many(rows)
            .await
            .context("inserting channel seed rows")?;
        log::info!("Seeded {} demo channels", CHANNEL_SEED_COUNT);
        Ok(())
    }

    /// Inserts randomized payments as a single batch.
    pub async fn seed_payments(&self) -> Result<()> {
        let mut rng = rand::thread_rng();
        let rows = (0..PAYMENT_SEED_COUNT)
            .map(|_| payment::ActiveModel {
                price: Set(rng.gen_range(1000..=9999)),
                is_nds: Set(rng.gen_bool(0.5)),
                ..Default::default()
            })
            .collect();

        self.payments
            .save_many(rows)
            .await
            .context("inserting payment seed rows")?;
        log::info!("Seeded {} demo payments", PAYMENT_SEED_COUNT);
        Ok(())
    }

    /// Re-reads all stored channels and payments and inserts randomized
    /// integrations referencing them, picked uniformly with replacement.
    ///
    /// Fails before inserting anything when no channels or payments exist,
    /// or when the creative fixture list is too short for the run.
    pub async fn seed_integrations(&self) -> Result<()> {
        let channels = self.channels.find_all().await.context("loading channels")?;
        let payments = self.payments.find_all().await.context("loading payments")?;
        if channels.is_empty() || payments.is_empty() {
            return Err(SeedError::MissingPrerequisites.into());
        }

        let mut rng = rand::thread_rng();
        let mut rows = Vec::with_capacity(INTEGRATION_SEED_COUNT);
        for i in 0..INTEGRATION_SEED_COUNT {
            let channel = &channels[rng.gen_range(0..channels.len())];
            let payment = &payments[rng.gen_range(0..payments.len())];

            rows.push(integration::ActiveModel {
                channel_id: Set(channel.id),
                payment_id: Set(payment.id),
                integration_date: Set(random_date_in_2024(&mut rng).into()),
                views: Set(rng.gen_range(500..=10_499)),
                status: Set(if rng.gen_bool(0.5) {
                    IntegrationStatus::Release
                } else {
                    IntegrationStatus::Cancel
                }),
                erid_token: Set(creatives::marker(i)?.to_string()),
                comment: Set(format!("Комментарий для примера {i}")),
                ..Default::default()
            });
        }

        self.integrations
            .save_many(rows)
            .await
            .context("inserting integration seed rows")?;
        log::info!("Seeded {} demo integrations", INTEGRATION_SEED_COUNT);
        Ok(())
    }

    /// Runs the full sequence: channels, then payments, then integrations.
    ///
    /// The order matters; integrations re-read the other two tables. The
    /// policy decides whether a failing step aborts the sequence or is
    /// logged and skipped.
    pub async fn generate_seeds(&self, policy: SeedPolicy) -> Result<()> {
        log::info!("Seeding demo data...");
        note_step(policy, "channels", self.seed_channels().await)?;
        note_step(policy, "payments", self.seed_payments().await)?;
        note_step(policy, "integrations", self.seed_integrations().await)?;
        log::info!("Demo data seeding finished");
        Ok(())
    }

    /// Deletes all rows from the seeded tables, children before parents:
    /// ord_integrations, integrations, payments, channels.
    ///
    /// Unlike the seed steps this always propagates failure; a later step
    /// failing leaves the earlier tables already emptied.
    pub async fn clear_all_data(&self) -> Result<(), SeedError> {
        let result = async {
            let mut removed = self
                .ord_integrations
                .delete_all()
                .await
                .context("clearing ord_integrations")?;
            removed += self
                .integrations
                .delete_all()
                .await
                .context("clearing integrations")?;
            removed += self
                .payments
                .delete_all()
                .await
                .context("clearing payments")?;
            removed += self
                .channels
                .delete_all()
                .await
                .context("clearing channels")?;
            anyhow::Ok(removed)
        }
        .await;

        match result {
            Ok(removed) => {
                log::info!(
                    "Cleared {} rows from ord_integrations, integrations, payments and channels",
                    removed
                );
                Ok(())
            }
            Err(source) => {
                log::error!("Failed to clear seeded tables: {:#}", source);
                Err(SeedError::Cleanup { source })
            }
        }
    }
}

fn demo_channel(
    name: &str,
    channel_type: ChannelType,
    status: ChannelStatus,
    link: &str,
) -> channel::ActiveModel {
    channel::ActiveModel {
        name: Set(name.to_string()),
        channel_type: Set(channel_type),
        status: Set(status),
        link: Set(link.to_string()),
        ..Default::default()
    }
}

fn note_step(policy: SeedPolicy, step: &str, result: Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => match policy {
            SeedPolicy::BestEffort => {
                log::error!("Failed to seed {}: {:#}", step, err);
                Ok(())
            }
            SeedPolicy::Strict => Err(err.context(format!("seeding {step}"))),
        },
    }
}

/// Returns a timestamp uniformly distributed over calendar year 2024,
/// start-of-year plus a uniform millisecond offset within the span.
pub fn random_date_in_2024(rng: &mut impl Rng) -> DateTime<Utc> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
    let span_ms = (end - start).num_milliseconds();

    start + Duration::milliseconds(rng.gen_range(0..=span_ms))
}

/// Builds an alphanumeric token of exactly `length` characters from base-36
/// fragments, concatenated and truncated.
///
/// Not used by the seeding path; ERID markers come from the creative
/// fixtures instead.
pub fn random_token(rng: &mut impl Rng, length: usize) -> String {
    const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut token = String::with_capacity(length);
    while token.len() < length {
        let mut fragment: u64 = rng.r#gen();
        while fragment > 0 {
            token.push(BASE36[(fragment % 36) as usize] as char);
            fragment /= 36;
        }
    }
    token.truncate(length);
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_date_stays_inside_2024() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let date = random_date_in_2024(&mut rng);
            assert!(date >= start, "date {date} before start of 2024");
            assert!(date <= end, "date {date} after end of 2024");
        }
    }

    #[test]
    fn random_token_has_exact_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for length in [1, 10, 36, 100] {
            let token = random_token(&mut rng, length);
            assert_eq!(token.len(), length);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn random_token_of_length_zero_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_token(&mut rng, 0), "");
    }
}
