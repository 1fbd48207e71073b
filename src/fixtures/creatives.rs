//! Mock creative registrations.
//!
//! An ordered list of ERID markers as they would come back from the ORD
//! after registering a creative. The integration seeder consumes them
//! positionally, one marker per generated row.

use crate::error::SeedError;

/// ERID markers for seeded integrations, in registration order.
pub const MARKERS: &[&str] = &[
    "2VtzqvgGHmB",
    "2Vtzqw1kP4d",
    "2VtzqxTa9Yc",
    "2Vtzqy8RkSe",
    "2VtzqzLMw2f",
    "2VtzqvN3bQg",
    "2Vtzqw6pXdh",
    "2VtzqxCe5Jj",
    "2VtzqyVt1Wk",
    "2VtzqzfU8Rm",
    "2VtzqvHq4Tn",
    "2VtzqwYb7Zp",
    "2VtzqxkD2Gq",
    "2VtzqyAs6Mr",
    "2VtzqzPw3Ks",
    "2VtzqvrE9Bt",
    "2VtzqwmJ5Nv",
    "2VtzqxBn8Cw",
    "2VtzqyGz4Dx",
    "2VtzqzSc1Fy",
    "2VtzqvdK7Hz",
    "2VtzqwtV2Lb",
    "2VtzqxhX6Pc",
    "2VtzqyjW9Qd",
];

/// Returns the marker at `index`, or an insufficient-fixture-data error when
/// the list is shorter than the seeder needs.
pub fn marker(index: usize) -> Result<&'static str, SeedError> {
    MARKERS
        .get(index)
        .copied()
        .ok_or(SeedError::InsufficientFixtures {
            needed: index + 1,
            available: MARKERS.len(),
        })
}
