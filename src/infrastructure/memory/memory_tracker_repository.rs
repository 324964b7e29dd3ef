//! In-memory implementation of the tracker repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Carrier, Tracker};
use crate::domain::repositories::{TrackerCapability, TrackerRepository};
use crate::domain::representation::TrackerRecord;
use crate::dto::{DeliveryDto, Envelope, TrackerDto};
use crate::error::AppError;

/// Tracker repository keeping trackers as transfer objects in memory.
///
/// Trackers are stored (and listed) as [`TrackerDto`] snapshots, the shape
/// a serialized store would hand back. Delivery snapshots are keyed by
/// `(carrier_id, tracking_number)` and never change.
///
/// A repository built with [`read_only`](Self::read_only) advertises only
/// the lookup capabilities.
pub struct MemoryTrackerRepository {
    trackers: RwLock<Vec<TrackerDto>>,
    deliveries: HashMap<(String, String), DeliveryDto>,
    read_only: bool,
}

impl MemoryTrackerRepository {
    /// Creates a writable repository.
    pub fn new(trackers: Vec<TrackerDto>) -> Self {
        Self {
            trackers: RwLock::new(trackers),
            deliveries: HashMap::new(),
            read_only: false,
        }
    }

    /// Creates a repository that only supports lookups.
    pub fn read_only(trackers: Vec<TrackerDto>) -> Self {
        Self {
            read_only: true,
            ..Self::new(trackers)
        }
    }

    /// Registers the snapshot returned for `carrier_id` / `tracking_number`.
    pub fn with_delivery(
        mut self,
        carrier_id: impl Into<String>,
        tracking_number: impl Into<String>,
        delivery: DeliveryDto,
    ) -> Self {
        self.deliveries
            .insert((carrier_id.into(), tracking_number.into()), delivery);
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Number of stored trackers.
    pub async fn len(&self) -> usize {
        self.trackers.read().await.len()
    }
}

#[async_trait]
impl TrackerRepository for MemoryTrackerRepository {
    fn supports(&self, capability: TrackerCapability) -> bool {
        !(self.read_only && capability.is_write())
    }

    async fn get_delivery(&self, carrier: &Carrier, tracking_number: &str) -> Envelope<DeliveryDto> {
        let key = (carrier.id().to_string(), tracking_number.to_string());
        match self.deliveries.get(&key) {
            Some(delivery) => Envelope::success(delivery.clone()),
            None => {
                AppError::not_found("delivery", format!("{}/{}", carrier.id(), tracking_number))
                    .into()
            }
        }
    }

    async fn get_trackers(&self) -> Envelope<Vec<TrackerRecord>> {
        let trackers = self.trackers.read().await;
        Envelope::success(
            trackers
                .iter()
                .cloned()
                .map(TrackerRecord::Transfer)
                .collect(),
        )
    }

    async fn add_tracker(&self, tracker: &Tracker) -> Envelope<bool> {
        let mut trackers = self.trackers.write().await;
        if trackers.iter().any(|t| t.id() == tracker.id()) {
            debug!(tracker_id = tracker.id(), "tracker already stored");
            return Envelope::success(false);
        }

        trackers.push(TrackerDto::from(tracker.clone()));
        Envelope::success(true)
    }

    async fn update_tracker(&self, tracker: &Tracker) -> Envelope<bool> {
        let mut trackers = self.trackers.write().await;
        match trackers.iter_mut().find(|t| t.id() == tracker.id()) {
            Some(stored) => {
                *stored = TrackerDto::from(tracker.clone());
                Envelope::success(true)
            }
            None => {
                debug!(tracker_id = tracker.id(), "update for unknown tracker");
                Envelope::success(false)
            }
        }
    }

    async fn delete_tracker(&self, tracker_id: &str) -> Envelope<bool> {
        let mut trackers = self.trackers.write().await;
        let before = trackers.len();
        trackers.retain(|t| t.id() != tracker_id);
        Envelope::success(trackers.len() != before)
    }

    async fn clear_trackers(&self) -> Envelope<bool> {
        self.trackers.write().await.clear();
        Envelope::success(true)
    }
}
