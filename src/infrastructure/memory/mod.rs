//! In-memory repository implementations.
//!
//! Provides process-local stores for the repository traits:
//! - [`MemoryCarrierRepository`] - Fixed carrier list
//! - [`MemoryTrackerRepository`] - Tracker store with seeded delivery snapshots
//!
//! Both are typically populated from a [`Seed`] document.

mod memory_carrier_repository;
mod memory_tracker_repository;
mod seed;

pub use memory_carrier_repository::MemoryCarrierRepository;
pub use memory_tracker_repository::MemoryTrackerRepository;
pub use seed::{Seed, SeedDelivery};
