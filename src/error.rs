//! # Error Handling
//!
//! Typed errors for the seeding workflow. Individual seed steps report
//! failures as `anyhow::Error`; the orchestrator decides whether they are
//! logged-and-swallowed or propagated (see [`crate::seeds::SeedPolicy`]).
//! Cleanup failures always propagate as [`SeedError::Cleanup`].

use thiserror::Error;

/// Errors raised by the seed generator.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Integrations cannot be built before channels and payments exist.
    #[error("cannot seed integrations: no channels or payments are stored yet")]
    MissingPrerequisites,

    /// The compiled-in creative list is shorter than the seeding run needs.
    #[error("insufficient fixture data: need {needed} creative markers, have {available}")]
    InsufficientFixtures { needed: usize, available: usize },

    /// A step of the child-to-parent delete sequence failed; earlier steps
    /// may already have removed rows.
    #[error("database cleanup failed")]
    Cleanup {
        #[source]
        source: anyhow::Error,
    },
}
