//! DTOs for the tracker mutation endpoint.

use serde::Deserialize;

use crate::application::use_cases::TrackerMutation;
use crate::dto::TrackerDto;

/// Request to change one field of a tracker and persist it.
///
/// The client sends the tracker it currently holds together with the
/// operation; the server rebuilds the entity, applies the operation, and
/// stores the result.
///
/// ```json
/// {
///   "tracker": { "id": "1", "carrierId": "kr.epost", "label": "Keyboard",
///                "trackingNumber": "123456", "memos": ["m1", "m2"] },
///   "op": "deleteMemo",
///   "index": 0
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct MutationRequest {
    pub tracker: TrackerDto,
    #[serde(flatten)]
    pub operation: MutationOperation,
}

/// Operation name (`op`) and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MutationOperation {
    UpdateCarrierId { carrier_id: String },
    UpdateLabel { label: String },
    UpdateTrackingNumber { tracking_number: String },
    AddMemo,
    UpdateMemo { index: usize, memo: String },
    DeleteMemo { index: usize },
}

impl From<MutationOperation> for TrackerMutation {
    fn from(operation: MutationOperation) -> Self {
        match operation {
            MutationOperation::UpdateCarrierId { carrier_id } => Self::UpdateCarrierId(carrier_id),
            MutationOperation::UpdateLabel { label } => Self::UpdateLabel(label),
            MutationOperation::UpdateTrackingNumber { tracking_number } => {
                Self::UpdateTrackingNumber(tracking_number)
            }
            MutationOperation::AddMemo => Self::AddMemo,
            MutationOperation::UpdateMemo { index, memo } => Self::UpdateMemo { index, memo },
            MutationOperation::DeleteMemo { index } => Self::DeleteMemo { index },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tracker_json() -> serde_json::Value {
        json!({
            "id": "1",
            "carrierId": "kr.epost",
            "label": "Keyboard",
            "trackingNumber": "123456",
            "memos": ["m1", "m2"]
        })
    }

    #[test]
    fn test_deserialize_update_carrier_id() {
        let request: MutationRequest = serde_json::from_value(json!({
            "tracker": tracker_json(),
            "op": "updateCarrierId",
            "carrierId": "kr.logen"
        }))
        .unwrap();

        assert_eq!(request.tracker.id(), "1");
        assert_eq!(
            TrackerMutation::from(request.operation),
            TrackerMutation::UpdateCarrierId("kr.logen".to_string())
        );
    }

    #[test]
    fn test_deserialize_add_memo() {
        let request: MutationRequest = serde_json::from_value(json!({
            "tracker": tracker_json(),
            "op": "addMemo"
        }))
        .unwrap();

        assert_eq!(request.operation, MutationOperation::AddMemo);
    }

    #[test]
    fn test_deserialize_update_memo() {
        let request: MutationRequest = serde_json::from_value(json!({
            "tracker": tracker_json(),
            "op": "updateMemo",
            "index": 1,
            "memo": "left at door"
        }))
        .unwrap();

        assert_eq!(
            TrackerMutation::from(request.operation),
            TrackerMutation::UpdateMemo {
                index: 1,
                memo: "left at door".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        let result = serde_json::from_value::<MutationRequest>(json!({
            "tracker": tracker_json(),
            "op": "renameCarrier"
        }));

        assert!(result.is_err());
    }
}
