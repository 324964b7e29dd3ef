//! Handler for the delivery status endpoint.

use axum::extract::{Path, State};
use tracing::debug;

use crate::dto::{DeliveryDto, Envelope};
use crate::state::AppState;

/// Looks up the delivery status of a parcel with a given carrier.
///
/// # Endpoint
///
/// `GET /api/deliveries/{carrier_id}/{tracking_number}`
///
/// An unknown carrier yields the carrier lookup's error envelope; the
/// delivery store is not consulted in that case.
pub async fn delivery_handler(
    State(state): State<AppState>,
    Path((carrier_id, tracking_number)): Path<(String, String)>,
) -> Envelope<DeliveryDto> {
    debug!(%carrier_id, %tracking_number, "Delivery lookup");

    state
        .tracker_use_case
        .get_delivery(&carrier_id, &tracking_number)
        .await
}
