//! # AdBoard Seeder Library
//!
//! Demo-data seeding for the AdBoard channel-monetization admin backend:
//! entity models, database-backed repositories and the seed generator that
//! populates and clears them.

pub mod config;
pub mod db;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod seeds;
pub use migration;
