//! API route configuration.

use crate::api::handlers::{
    add_tracker_handler, carrier_list_handler, clear_trackers_handler, delete_tracker_handler,
    delivery_handler, mutate_tracker_handler, tracker_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /carriers`                                - List carriers
/// - `GET    /trackers`                                - List trackers
/// - `POST   /trackers`                                - Add a tracker
/// - `DELETE /trackers`                                - Remove every tracker
/// - `DELETE /trackers/{id}`                           - Remove one tracker
/// - `POST   /trackers/mutations`                      - Change and persist a tracker
/// - `GET    /deliveries/{carrier_id}/{tracking_number}` - Delivery status
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/carriers", get(carrier_list_handler))
        .route(
            "/trackers",
            get(tracker_list_handler)
                .post(add_tracker_handler)
                .delete(clear_trackers_handler),
        )
        .route("/trackers/mutations", post(mutate_tracker_handler))
        .route("/trackers/{id}", delete(delete_tracker_handler))
        .route(
            "/deliveries/{carrier_id}/{tracking_number}",
            get(delivery_handler),
        )
}
