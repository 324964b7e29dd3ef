//! In-memory implementation of the carrier repository.

use async_trait::async_trait;

use crate::domain::entities::Carrier;
use crate::domain::repositories::{CarrierCapability, CarrierRepository};
use crate::domain::representation::CarrierRecord;
use crate::dto::Envelope;
use crate::error::AppError;

/// Carrier repository backed by a fixed list.
///
/// Carriers never change at runtime, so no locking is needed.
pub struct MemoryCarrierRepository {
    carriers: Vec<Carrier>,
}

impl MemoryCarrierRepository {
    /// Creates a new repository holding `carriers` in the given order.
    pub fn new(carriers: Vec<Carrier>) -> Self {
        Self { carriers }
    }

    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

#[async_trait]
impl CarrierRepository for MemoryCarrierRepository {
    fn supports(&self, _capability: CarrierCapability) -> bool {
        true
    }

    async fn get_carriers(&self) -> Envelope<Vec<CarrierRecord>> {
        Envelope::success(
            self.carriers
                .iter()
                .cloned()
                .map(CarrierRecord::Entity)
                .collect(),
        )
    }

    async fn get_carrier(&self, carrier_id: &str) -> Envelope<Carrier> {
        match self.carriers.iter().find(|c| c.id() == carrier_id) {
            Some(carrier) => Envelope::success(carrier.clone()),
            None => AppError::not_found("carrier", carrier_id).into(),
        }
    }
}
