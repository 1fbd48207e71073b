//! # Entity Models
//!
//! SeaORM entity models for the tables the seeder populates and clears.

pub mod channel;
pub mod integration;
pub mod ord_integration;
pub mod payment;
