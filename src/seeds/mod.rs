//! Database seeding functionality
//!
//! This module provides functionality to populate the database with demo
//! data for local and staging environments, and to wipe it again.

pub mod generator;

pub use generator::{
    CHANNEL_SEED_COUNT, INTEGRATION_SEED_COUNT, PAYMENT_SEED_COUNT, SeedGenerator, SeedPolicy,
    random_date_in_2024, random_token,
};
