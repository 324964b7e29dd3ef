//! Handlers for tracker management endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::info;

use crate::api::dto::mutation::MutationRequest;
use crate::domain::entities::Tracker;
use crate::domain::representation::Representation;
use crate::dto::{Envelope, TrackerDto};
use crate::state::AppState;

/// Lists stored trackers in insertion order.
///
/// # Endpoint
///
/// `GET /api/trackers`
pub async fn tracker_list_handler(State(state): State<AppState>) -> Envelope<Vec<TrackerDto>> {
    state
        .tracker_use_case
        .get_trackers()
        .await
        .map(|records| {
            records
                .into_iter()
                .map(Representation::into_transfer)
                .collect()
        })
}

/// Stores a new tracker.
///
/// # Endpoint
///
/// `POST /api/trackers`
///
/// # Request Body
///
/// ```json
/// { "id": "1", "carrierId": "kr.epost", "label": "Keyboard",
///   "trackingNumber": "123456", "memos": [] }
/// ```
///
/// `data` is `false` when a tracker with the same id already exists.
pub async fn add_tracker_handler(
    State(state): State<AppState>,
    Json(payload): Json<TrackerDto>,
) -> Envelope<bool> {
    let tracker = Tracker::from(payload);
    let envelope = state.tracker_use_case.add_tracker(&tracker).await;

    if envelope.data() == Some(&true) {
        info!(tracker_id = tracker.id(), "Tracker added");
    }

    envelope
}

/// Removes every stored tracker.
///
/// # Endpoint
///
/// `DELETE /api/trackers`
pub async fn clear_trackers_handler(State(state): State<AppState>) -> Envelope<bool> {
    let envelope = state.tracker_use_case.clear_trackers().await;

    if !envelope.is_error() {
        info!("Trackers cleared");
    }

    envelope
}

/// Removes one tracker by id.
///
/// # Endpoint
///
/// `DELETE /api/trackers/{id}`
///
/// `data` is `false` when no tracker has that id.
pub async fn delete_tracker_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Envelope<bool> {
    let envelope = state.tracker_use_case.delete_tracker(&id).await;

    if envelope.data() == Some(&true) {
        info!(tracker_id = %id, "Tracker deleted");
    }

    envelope
}

/// Applies one change to a tracker and persists it.
///
/// # Endpoint
///
/// `POST /api/trackers/mutations`
///
/// # Request Body
///
/// ```json
/// {
///   "tracker": { "id": "1", "carrierId": "kr.epost", "label": "Keyboard",
///                "trackingNumber": "123456", "memos": ["m1"] },
///   "op": "updateMemo",
///   "index": 0,
///   "memo": "left at door"
/// }
/// ```
///
/// Supported `op` values: `updateCarrierId`, `updateLabel`,
/// `updateTrackingNumber`, `addMemo`, `updateMemo`, `deleteMemo`.
///
/// The response is the repository's update envelope. A memo index outside
/// the tracker's memo list yields an error envelope and nothing is stored.
pub async fn mutate_tracker_handler(
    State(state): State<AppState>,
    Json(request): Json<MutationRequest>,
) -> Envelope<bool> {
    let mut tracker = Tracker::from(request.tracker);

    state
        .tracker_use_case
        .apply(&mut tracker, request.operation.into())
        .await
}
