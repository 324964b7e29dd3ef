//! Transfer object for trackers.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Tracker;

/// Read-only snapshot of a [`Tracker`].
///
/// Unlike the entity it has no mutation methods; to change a tracker the
/// caller converts it back into a [`Tracker`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerDto {
    id: String,
    carrier_id: String,
    label: String,
    tracking_number: String,
    memos: Vec<String>,
}

impl TrackerDto {
    pub fn new(
        id: impl Into<String>,
        carrier_id: impl Into<String>,
        label: impl Into<String>,
        tracking_number: impl Into<String>,
        memos: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            carrier_id: carrier_id.into(),
            label: label.into(),
            tracking_number: tracking_number.into(),
            memos,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn carrier_id(&self) -> &str {
        &self.carrier_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    pub fn memos(&self) -> &[String] {
        &self.memos
    }
}

impl From<Tracker> for TrackerDto {
    fn from(tracker: Tracker) -> Self {
        Self::new(
            tracker.id(),
            tracker.carrier_id(),
            tracker.label(),
            tracker.tracking_number(),
            tracker.memos().to_vec(),
        )
    }
}

impl From<TrackerDto> for Tracker {
    fn from(dto: TrackerDto) -> Self {
        Tracker::new(
            dto.id,
            dto.carrier_id,
            dto.label,
            dto.tracking_number,
            dto.memos,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_dto() -> TrackerDto {
        TrackerDto::new(
            "test-id",
            "carrier-id",
            "test-label",
            "123456",
            vec!["memo1".to_string(), "memo2".to_string()],
        )
    }

    #[test]
    fn test_accessors() {
        let dto = sample_dto();

        assert_eq!(dto.id(), "test-id");
        assert_eq!(dto.carrier_id(), "carrier-id");
        assert_eq!(dto.label(), "test-label");
        assert_eq!(dto.tracking_number(), "123456");
        assert_eq!(dto.memos(), ["memo1", "memo2"]);
    }

    #[test]
    fn test_entity_conversion_preserves_memo_order() {
        let mut tracker = Tracker::from(sample_dto());
        tracker.add_memo();

        let dto = TrackerDto::from(tracker);

        assert_eq!(dto.memos(), ["memo1", "memo2", ""]);
    }

    #[test]
    fn test_json_field_names() {
        let value = serde_json::to_value(sample_dto()).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "test-id",
                "carrierId": "carrier-id",
                "label": "test-label",
                "trackingNumber": "123456",
                "memos": ["memo1", "memo2"]
            })
        );
    }
}
