//! Delivery status snapshot returned by a tracker repository.

use serde::{Deserialize, Serialize};

use crate::domain::values::{DeliveryLocation, DeliveryProgress, DeliveryState};

/// Current status of one shipment as reported by its carrier.
///
/// Produced only by [`TrackerRepository::get_delivery`] and handed back to
/// callers as-is; the use-case layer never transcodes or mutates it.
///
/// [`TrackerRepository::get_delivery`]: crate::domain::repositories::TrackerRepository::get_delivery
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryDto {
    from: DeliveryLocation,
    to: DeliveryLocation,
    progresses: Vec<DeliveryProgress>,
    state: DeliveryState,
}

impl DeliveryDto {
    pub fn new(
        from: DeliveryLocation,
        to: DeliveryLocation,
        progresses: Vec<DeliveryProgress>,
        state: DeliveryState,
    ) -> Self {
        Self {
            from,
            to,
            progresses,
            state,
        }
    }

    pub fn from(&self) -> &DeliveryLocation {
        &self.from
    }

    pub fn to(&self) -> &DeliveryLocation {
        &self.to
    }

    /// Progress events, oldest first.
    pub fn progresses(&self) -> &[DeliveryProgress] {
        &self.progresses
    }

    pub fn state(&self) -> &DeliveryState {
        &self.state
    }
}
