use anyhow::{Context, Result};

use crate::domain::models::RawReview;

const HOSTAWAY_MOCK: &str = include_str!("../../data/hostaway_mock.json");

/// Parses the bundled Hostaway mock payload into raw reviews.
///
/// The bundle stands in for the Hostaway API in this demo; a malformed
/// bundle is a packaging error and aborts startup.
pub fn load_seed_reviews() -> Result<Vec<RawReview>> {
    serde_json::from_str(HOSTAWAY_MOCK).context("Failed to parse bundled Hostaway mock data")
}
