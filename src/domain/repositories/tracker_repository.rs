//! Repository trait for tracked shipments.

use crate::domain::entities::{Carrier, Tracker};
use crate::domain::representation::TrackerRecord;
use crate::dto::{DeliveryDto, Envelope};
use crate::error::AppError;
use async_trait::async_trait;

/// Optional operations a tracker repository may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerCapability {
    GetDelivery,
    GetTrackers,
    AddTracker,
    UpdateTracker,
    DeleteTracker,
    ClearTrackers,
}

impl TrackerCapability {
    pub const ALL: [Self; 6] = [
        Self::GetDelivery,
        Self::GetTrackers,
        Self::AddTracker,
        Self::UpdateTracker,
        Self::DeleteTracker,
        Self::ClearTrackers,
    ];

    /// Stable operation name used in diagnostics.
    pub fn operation(self) -> &'static str {
        match self {
            Self::GetDelivery => "getDelivery",
            Self::GetTrackers => "getTrackers",
            Self::AddTracker => "addTracker",
            Self::UpdateTracker => "updateTracker",
            Self::DeleteTracker => "deleteTracker",
            Self::ClearTrackers => "clearTrackers",
        }
    }

    /// Whether the operation changes stored trackers.
    pub fn is_write(self) -> bool {
        !matches!(self, Self::GetDelivery | Self::GetTrackers)
    }
}

/// Repository interface for trackers and their delivery status.
///
/// Same capability model as
/// [`CarrierRepository`](super::CarrierRepository): check
/// [`supports`](Self::supports) first, unimplemented operations fall back to
/// an "unsupported" error envelope.
///
/// Boolean payloads report whether the store changed: `Some(false)` means
/// "nothing to do" (duplicate id, unknown id) and is not an error.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryTrackerRepository`] - In-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerRepository: Send + Sync {
    /// Whether this collaborator implements `capability`.
    fn supports(&self, capability: TrackerCapability) -> bool;

    /// Fetches the current delivery status for a parcel handled by `carrier`.
    async fn get_delivery(&self, carrier: &Carrier, tracking_number: &str) -> Envelope<DeliveryDto> {
        let _ = (carrier, tracking_number);
        AppError::unsupported(TrackerCapability::GetDelivery.operation()).into()
    }

    /// Lists stored trackers, as entities or transfer objects.
    async fn get_trackers(&self) -> Envelope<Vec<TrackerRecord>> {
        AppError::unsupported(TrackerCapability::GetTrackers.operation()).into()
    }

    async fn add_tracker(&self, tracker: &Tracker) -> Envelope<bool> {
        let _ = tracker;
        AppError::unsupported(TrackerCapability::AddTracker.operation()).into()
    }

    /// Replaces the stored tracker with the same id.
    async fn update_tracker(&self, tracker: &Tracker) -> Envelope<bool> {
        let _ = tracker;
        AppError::unsupported(TrackerCapability::UpdateTracker.operation()).into()
    }

    async fn delete_tracker(&self, tracker_id: &str) -> Envelope<bool> {
        let _ = tracker_id;
        AppError::unsupported(TrackerCapability::DeleteTracker.operation()).into()
    }

    /// Removes every stored tracker.
    async fn clear_trackers(&self) -> Envelope<bool> {
        AppError::unsupported(TrackerCapability::ClearTrackers.operation()).into()
    }
}
