//! Carrier listing use case.

use std::sync::Arc;

use tracing::debug;

use crate::application::context::ExecutionContext;
use crate::application::use_cases::unsupported;
use crate::domain::repositories::{CarrierCapability, CarrierRepository};
use crate::domain::representation::CarrierRecord;
use crate::dto::Envelope;

/// Use case exposing carrier reference data to the presentation layer.
///
/// Records are emitted as transfer objects or entities depending on the
/// [`ExecutionContext`] the use case was built with.
pub struct CarrierUseCase<R: CarrierRepository> {
    repository: Arc<R>,
    context: ExecutionContext,
}

impl<R: CarrierRepository> CarrierUseCase<R> {
    /// Creates a new carrier use case.
    pub fn new(repository: Arc<R>, context: ExecutionContext) -> Self {
        Self {
            repository,
            context,
        }
    }

    /// Returns the same use case emitting for another context.
    pub fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Lists every carrier in repository order.
    ///
    /// Each record is rebuilt in the representation the context demands.
    /// A repository error is returned with its message unchanged.
    pub async fn get_carriers(&self) -> Envelope<Vec<CarrierRecord>> {
        if !self.repository.supports(CarrierCapability::GetCarriers) {
            return unsupported(CarrierCapability::GetCarriers.operation());
        }

        let envelope = self.repository.get_carriers().await;
        if envelope.is_error() {
            debug!(message = ?envelope.message(), "carrier repository failed to list carriers");
        }

        self.context.transcode(envelope)
    }
}
