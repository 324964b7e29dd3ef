//! Handler for the carrier listing endpoint.

use axum::extract::State;

use crate::domain::representation::Representation;
use crate::dto::{CarrierDto, Envelope};
use crate::state::AppState;

/// Lists every known carrier.
///
/// # Endpoint
///
/// `GET /api/carriers`
///
/// # Response
///
/// ```json
/// {
///   "isError": false,
///   "message": null,
///   "data": [
///     {
///       "id": "kr.epost", "no": 1, "name": "epost", "displayName": "Korea Post",
///       "isCrawlable": true, "isPopupEnabled": false, "popupURL": ""
///     }
///   ]
/// }
/// ```
pub async fn carrier_list_handler(State(state): State<AppState>) -> Envelope<Vec<CarrierDto>> {
    state
        .carrier_use_case
        .get_carriers()
        .await
        .map(|records| {
            records
                .into_iter()
                .map(Representation::into_transfer)
                .collect()
        })
}
