//! Domain layer containing business entities and repository contracts.
//!
//! This module holds everything the use cases reason about, independent of
//! storage or transport concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Carrier and Tracker, the live business objects
//! - [`values`] - Read-only value objects used in delivery snapshots
//! - [`representation`] - Tagged entity-or-transfer-object payloads
//! - [`repositories`] - Data access trait definitions with optional capabilities
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Entities own their state transitions and invariants
//! - Repository traits define contracts implemented by infrastructure layer
//! - Orchestration lives in [`crate::application::use_cases`]

pub mod entities;
pub mod repositories;
pub mod representation;
pub mod values;
