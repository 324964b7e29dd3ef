//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod carriers;
pub mod deliveries;
pub mod health;
pub mod trackers;

pub use carriers::carrier_list_handler;
pub use deliveries::delivery_handler;
pub use health::health_handler;
pub use trackers::{
    add_tracker_handler, clear_trackers_handler, delete_tracker_handler, mutate_tracker_handler,
    tracker_list_handler,
};
