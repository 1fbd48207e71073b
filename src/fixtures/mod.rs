//! # Fixture Data
//!
//! Compiled-in fixture lists consumed by the seeding routines.

pub mod creatives;
