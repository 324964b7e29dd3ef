//! Repository trait definitions for the domain layer.
//!
//! Repositories are the external collaborators the use cases talk to. Each
//! trait pairs its async operations with a capability enum and a
//! `supports` query, because a given collaborator (a browser store, a
//! read-only mirror, a remote API) may only implement some of them.
//!
//! # Architecture
//!
//! - Traits define the contract; every operation returns an
//!   [`Envelope`](crate::dto::Envelope) instead of raising errors
//! - Implementations live in `crate::infrastructure`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CarrierRepository`] - Carrier reference data
//! - [`TrackerRepository`] - Tracker storage and delivery lookups

pub mod carrier_repository;
pub mod tracker_repository;

pub use carrier_repository::{CarrierCapability, CarrierRepository};
pub use tracker_repository::{TrackerCapability, TrackerRepository};

#[cfg(test)]
pub use carrier_repository::MockCarrierRepository;
#[cfg(test)]
pub use tracker_repository::MockTrackerRepository;
