//! Value objects that make up a delivery snapshot.
//!
//! These have no identity of their own and are only ever read. Missing
//! fields deserialize to empty strings, matching how carriers report
//! partially known locations.

use serde::{Deserialize, Serialize};

/// Where (and when) a parcel was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryLocation {
    pub name: String,
    pub time: String,
}

impl DeliveryLocation {
    pub fn new(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
        }
    }
}

/// Carrier-reported delivery phase, e.g. `{ id: "in_transit", name: "In transit" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryState {
    pub id: String,
    pub name: String,
}

impl DeliveryState {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One event in a delivery's history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryProgress {
    pub time: String,
    pub location: DeliveryLocation,
    pub state: DeliveryState,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_defaults_to_empty() {
        let location: DeliveryLocation = serde_json::from_value(json!({})).unwrap();

        assert_eq!(location, DeliveryLocation::default());
        assert!(location.name.is_empty());
    }

    #[test]
    fn test_progress_from_partial_json() {
        let progress: DeliveryProgress = serde_json::from_value(json!({
            "time": "2024-05-01T09:00:00+09:00",
            "state": { "id": "at_pickup", "name": "Picked up" }
        }))
        .unwrap();

        assert_eq!(progress.state, DeliveryState::new("at_pickup", "Picked up"));
        assert_eq!(progress.location, DeliveryLocation::default());
        assert!(progress.description.is_empty());
    }
}
