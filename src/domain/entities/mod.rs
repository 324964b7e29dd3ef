//! Core domain entities for shipment tracking.
//!
//! # Entity Types
//!
//! - [`Carrier`] - A shipping company (immutable reference data)
//! - [`Tracker`] - A tracked shipment that owns its mutation logic
//!
//! Entities are the "live" representation used inside a client context. When
//! they cross a serialization boundary they are copied into the transfer
//! objects in [`crate::dto`].

pub mod carrier;
pub mod tracker;

pub use carrier::Carrier;
pub use tracker::{Tracker, TrackerError};
