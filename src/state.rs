//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::context::ExecutionContext;
use crate::application::use_cases::{CarrierUseCase, TrackerUseCase};
use crate::infrastructure::memory::{MemoryCarrierRepository, MemoryTrackerRepository};

pub type ServerCarrierUseCase = CarrierUseCase<MemoryCarrierRepository>;
pub type ServerTrackerUseCase = TrackerUseCase<MemoryTrackerRepository, MemoryCarrierRepository>;

/// Use cases and stores shared by every request.
///
/// Use cases are built for [`ExecutionContext::Server`]: responses leave the
/// process, so they carry transfer objects.
#[derive(Clone)]
pub struct AppState {
    pub carrier_use_case: Arc<ServerCarrierUseCase>,
    pub tracker_use_case: Arc<ServerTrackerUseCase>,
    pub carrier_repository: Arc<MemoryCarrierRepository>,
    pub tracker_repository: Arc<MemoryTrackerRepository>,
}

impl AppState {
    pub fn new(carriers: MemoryCarrierRepository, trackers: MemoryTrackerRepository) -> Self {
        let carrier_repository = Arc::new(carriers);
        let tracker_repository = Arc::new(trackers);

        let carrier_use_case = Arc::new(CarrierUseCase::new(
            carrier_repository.clone(),
            ExecutionContext::Server,
        ));
        let tracker_use_case = Arc::new(TrackerUseCase::new(
            tracker_repository.clone(),
            carrier_repository.clone(),
            ExecutionContext::Server,
        ));

        Self {
            carrier_use_case,
            tracker_use_case,
            carrier_repository,
            tracker_repository,
        }
    }
}
