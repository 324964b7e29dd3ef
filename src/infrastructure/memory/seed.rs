//! JSON seed data for the in-memory repositories.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{MemoryCarrierRepository, MemoryTrackerRepository};
use crate::domain::entities::Carrier;
use crate::dto::{CarrierDto, DeliveryDto, TrackerDto};

/// Initial contents for the in-memory stores.
///
/// ```json
/// {
///   "carriers": [{ "id": "kr.epost", "no": 1, "name": "epost", "displayName": "Korea Post",
///                  "isCrawlable": true, "isPopupEnabled": false, "popupURL": "" }],
///   "trackers": [{ "id": "1", "carrierId": "kr.epost", "label": "Keyboard",
///                  "trackingNumber": "123456", "memos": [] }],
///   "deliveries": [{ "carrierId": "kr.epost", "trackingNumber": "123456",
///                    "delivery": { "state": { "id": "in_transit", "name": "In transit" } } }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub carriers: Vec<CarrierDto>,
    pub trackers: Vec<TrackerDto>,
    pub deliveries: Vec<SeedDelivery>,
}

/// A delivery snapshot keyed by carrier and tracking number.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedDelivery {
    pub carrier_id: String,
    pub tracking_number: String,
    pub delivery: DeliveryDto,
}

impl Seed {
    /// Parses a seed document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the seed shape.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse seed JSON")
    }

    /// Reads and parses a seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        Self::from_json(&json)
    }

    /// Builds both repositories from this seed.
    ///
    /// With `read_only` set, the tracker repository only advertises lookups.
    pub fn into_repositories(
        self,
        read_only: bool,
    ) -> (MemoryCarrierRepository, MemoryTrackerRepository) {
        let carriers =
            MemoryCarrierRepository::new(self.carriers.into_iter().map(Carrier::from).collect());

        let trackers = if read_only {
            MemoryTrackerRepository::read_only(self.trackers)
        } else {
            MemoryTrackerRepository::new(self.trackers)
        };
        let trackers = self.deliveries.into_iter().fold(trackers, |repo, seeded| {
            repo.with_delivery(seeded.carrier_id, seeded.tracking_number, seeded.delivery)
        });

        (carriers, trackers)
    }
}
