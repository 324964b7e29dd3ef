//! # Parcel Tracker
//!
//! Shipment tracking service: carriers, user-defined trackers, and the
//! delivery status reported for each parcel, served over an Axum REST API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, value objects, and repository traits
//! - **Application Layer** ([`application`]) - Use cases and the execution context
//! - **Transfer Objects** ([`dto`]) - Immutable snapshots and the result envelope
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory stores and seed loading
//! - **API Layer** ([`api`]) - REST handlers and middleware
//!
//! ## Result Envelopes
//!
//! Every repository and use-case call answers with an [`dto::Envelope`]
//! (`{isError, message, data}`) instead of raising errors. Repositories
//! declare which operations they implement; calling an unimplemented one
//! yields an `unsupported repository operation: <name>` envelope without
//! touching the store.
//!
//! ## Execution Context
//!
//! Use cases run in the server context (records leave as transfer objects)
//! or the client context (records come back as live entities). The HTTP
//! server uses the former, the `admin` binary the latter.
//!
//! ## Quick Start
//!
//! ```bash
//! export SEED_FILE="./seed.json"   # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::context::ExecutionContext;
    pub use crate::application::use_cases::{CarrierUseCase, TrackerMutation, TrackerUseCase};
    pub use crate::domain::entities::{Carrier, Tracker, TrackerError};
    pub use crate::domain::representation::{CarrierRecord, Representation, TrackerRecord};
    pub use crate::dto::{CarrierDto, DeliveryDto, Envelope, TrackerDto};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::{MemoryCarrierRepository, MemoryTrackerRepository, Seed};
    pub use crate::state::AppState;
}
