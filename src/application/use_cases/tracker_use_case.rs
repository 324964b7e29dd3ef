//! Tracker orchestration use case.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::context::ExecutionContext;
use crate::application::use_cases::unsupported;
use crate::domain::entities::{Tracker, TrackerError};
use crate::domain::repositories::{
    CarrierCapability, CarrierRepository, TrackerCapability, TrackerRepository,
};
use crate::domain::representation::TrackerRecord;
use crate::dto::{DeliveryDto, Envelope};
use crate::error::AppError;

/// A single field change applied to a tracker before it is persisted.
///
/// Mirrors the six mutation operations on [`TrackerUseCase`] so callers that
/// receive the change as data (e.g. a JSON body) can dispatch it in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerMutation {
    UpdateCarrierId(String),
    UpdateLabel(String),
    UpdateTrackingNumber(String),
    AddMemo,
    UpdateMemo { index: usize, memo: String },
    DeleteMemo { index: usize },
}

/// Use case coordinating tracker storage, delivery lookups, and tracker
/// mutations.
///
/// Mutations follow a strict mutate-then-persist sequence: the caller's
/// [`Tracker`] changes itself, then the whole tracker is handed to
/// [`TrackerRepository::update_tracker`] exactly once.
pub struct TrackerUseCase<T: TrackerRepository, C: CarrierRepository> {
    tracker_repository: Arc<T>,
    carrier_repository: Arc<C>,
    context: ExecutionContext,
}

impl<T: TrackerRepository, C: CarrierRepository> TrackerUseCase<T, C> {
    /// Creates a new tracker use case.
    pub fn new(
        tracker_repository: Arc<T>,
        carrier_repository: Arc<C>,
        context: ExecutionContext,
    ) -> Self {
        Self {
            tracker_repository,
            carrier_repository,
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

    /// Resolves the carrier, then asks the tracker repository for the
    /// delivery status.
    ///
    /// If the carrier lookup fails its envelope is returned as-is and the
    /// delivery lookup is never made. Otherwise the delivery envelope is
    /// returned without any transcoding.
    pub async fn get_delivery(
        &self,
        carrier_id: &str,
        tracking_number: &str,
    ) -> Envelope<DeliveryDto> {
        if !self
            .tracker_repository
            .supports(TrackerCapability::GetDelivery)
        {
            return unsupported(TrackerCapability::GetDelivery.operation());
        }
        if !self
            .carrier_repository
            .supports(CarrierCapability::GetCarrier)
        {
            return unsupported(CarrierCapability::GetCarrier.operation());
        }

        let carrier_envelope = self.carrier_repository.get_carrier(carrier_id).await;
        if carrier_envelope.is_error() {
            debug!(
                carrier_id,
                message = ?carrier_envelope.message(),
                "carrier lookup failed, skipping delivery lookup"
            );
            return carrier_envelope.propagate();
        }

        let Some(carrier) = carrier_envelope.into_data() else {
            return AppError::not_found("carrier", carrier_id).into();
        };

        self.tracker_repository
            .get_delivery(&carrier, tracking_number)
            .await
    }

    pub async fn add_tracker(&self, tracker: &Tracker) -> Envelope<bool> {
        if !self.tracker_repository.supports(TrackerCapability::AddTracker) {
            return unsupported(TrackerCapability::AddTracker.operation());
        }

        self.tracker_repository.add_tracker(tracker).await
    }

    /// Lists stored trackers in repository order, rebuilt for the current
    /// context.
    pub async fn get_trackers(&self) -> Envelope<Vec<TrackerRecord>> {
        if !self
            .tracker_repository
            .supports(TrackerCapability::GetTrackers)
        {
            return unsupported(TrackerCapability::GetTrackers.operation());
        }

        let envelope = self.tracker_repository.get_trackers().await;
        if envelope.is_error() {
            debug!(message = ?envelope.message(), "tracker repository failed to list trackers");
        }

        self.context.transcode(envelope)
    }

    pub async fn delete_tracker(&self, tracker_id: &str) -> Envelope<bool> {
        if !self
            .tracker_repository
            .supports(TrackerCapability::DeleteTracker)
        {
            return unsupported(TrackerCapability::DeleteTracker.operation());
        }

        self.tracker_repository.delete_tracker(tracker_id).await
    }

    pub async fn clear_trackers(&self) -> Envelope<bool> {
        if !self
            .tracker_repository
            .supports(TrackerCapability::ClearTrackers)
        {
            return unsupported(TrackerCapability::ClearTrackers.operation());
        }

        self.tracker_repository.clear_trackers().await
    }

    pub async fn update_carrier_id(
        &self,
        tracker: &mut Tracker,
        carrier_id: impl Into<String> + Send,
    ) -> Envelope<bool> {
        self.mutate_and_persist(tracker, |t| {
            t.update_carrier_id(carrier_id);
            Ok(())
        })
        .await
    }

    pub async fn update_label(
        &self,
        tracker: &mut Tracker,
        label: impl Into<String> + Send,
    ) -> Envelope<bool> {
        self.mutate_and_persist(tracker, |t| {
            t.update_label(label);
            Ok(())
        })
        .await
    }

    pub async fn update_tracking_number(
        &self,
        tracker: &mut Tracker,
        tracking_number: impl Into<String> + Send,
    ) -> Envelope<bool> {
        self.mutate_and_persist(tracker, |t| {
            t.update_tracking_number(tracking_number);
            Ok(())
        })
        .await
    }

    pub async fn add_memo(&self, tracker: &mut Tracker) -> Envelope<bool> {
        self.mutate_and_persist(tracker, |t| {
            t.add_memo();
            Ok(())
        })
        .await
    }

    /// Replaces one memo. Bounds are checked by the tracker itself; an
    /// out-of-range index comes back as an error envelope and nothing is
    /// persisted.
    pub async fn update_memo(
        &self,
        tracker: &mut Tracker,
        index: usize,
        memo: impl Into<String> + Send,
    ) -> Envelope<bool> {
        self.mutate_and_persist(tracker, |t| t.update_memo(index, memo))
            .await
    }

    /// Removes one memo. Same bounds behavior as [`Self::update_memo`].
    pub async fn delete_memo(&self, tracker: &mut Tracker, index: usize) -> Envelope<bool> {
        self.mutate_and_persist(tracker, |t| t.delete_memo(index))
            .await
    }

    /// Dispatches a [`TrackerMutation`] to the matching operation.
    pub async fn apply(&self, tracker: &mut Tracker, mutation: TrackerMutation) -> Envelope<bool> {
        match mutation {
            TrackerMutation::UpdateCarrierId(carrier_id) => {
                self.update_carrier_id(tracker, carrier_id).await
            }
            TrackerMutation::UpdateLabel(label) => self.update_label(tracker, label).await,
            TrackerMutation::UpdateTrackingNumber(tracking_number) => {
                self.update_tracking_number(tracker, tracking_number).await
            }
            TrackerMutation::AddMemo => self.add_memo(tracker).await,
            TrackerMutation::UpdateMemo { index, memo } => {
                self.update_memo(tracker, index, memo).await
            }
            TrackerMutation::DeleteMemo { index } => self.delete_memo(tracker, index).await,
        }
    }

    /// Runs `mutation` on the tracker, then persists the whole tracker with a
    /// single update call.
    async fn mutate_and_persist<F>(&self, tracker: &mut Tracker, mutation: F) -> Envelope<bool>
    where
        F: FnOnce(&mut Tracker) -> Result<(), TrackerError>,
    {
        if !self
            .tracker_repository
            .supports(TrackerCapability::UpdateTracker)
        {
            return unsupported(TrackerCapability::UpdateTracker.operation());
        }

        if let Err(err) = mutation(tracker) {
            warn!(tracker_id = tracker.id(), error = %err, "tracker rejected mutation");
            return AppError::from(err).into();
        }

        self.tracker_repository.update_tracker(tracker).await
    }
}
