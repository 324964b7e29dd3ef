//! Use cases exposed to the presentation layer.
//!
//! Every operation returns an [`Envelope`]; failures from repositories are
//! passed through verbatim and nothing is raised out of band.

pub mod carrier_use_case;
pub mod tracker_use_case;

pub use carrier_use_case::CarrierUseCase;
pub use tracker_use_case::{TrackerMutation, TrackerUseCase};

use tracing::debug;

use crate::dto::Envelope;
use crate::error::AppError;

/// Short-circuit answer for a capability the collaborator lacks.
fn unsupported<T>(operation: &'static str) -> Envelope<T> {
    debug!(operation, "repository does not support operation");
    AppError::unsupported(operation).into()
}
