//! Repository trait for carrier reference data.

use crate::domain::entities::Carrier;
use crate::domain::representation::CarrierRecord;
use crate::dto::Envelope;
use crate::error::AppError;
use async_trait::async_trait;

/// Optional operations a carrier repository may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarrierCapability {
    GetCarriers,
    GetCarrier,
}

impl CarrierCapability {
    pub const ALL: [Self; 2] = [Self::GetCarriers, Self::GetCarrier];

    /// Stable operation name used in diagnostics.
    pub fn operation(self) -> &'static str {
        match self {
            Self::GetCarriers => "getCarriers",
            Self::GetCarrier => "getCarrier",
        }
    }
}

/// Repository interface for carriers.
///
/// Every operation is a capability: callers ask [`supports`](Self::supports)
/// before invoking it. Implementations only override the operations they
/// actually back; the defaults answer with an "unsupported" error envelope.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryCarrierRepository`] - In-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarrierRepository: Send + Sync {
    /// Whether this collaborator implements `capability`.
    fn supports(&self, capability: CarrierCapability) -> bool;

    /// Lists all carriers, as entities or transfer objects.
    async fn get_carriers(&self) -> Envelope<Vec<CarrierRecord>> {
        AppError::unsupported(CarrierCapability::GetCarriers.operation()).into()
    }

    /// Looks up one carrier by id.
    ///
    /// A missing carrier is reported as an error envelope, not as empty data.
    async fn get_carrier(&self, carrier_id: &str) -> Envelope<Carrier> {
        let _ = carrier_id;
        AppError::unsupported(CarrierCapability::GetCarrier.operation()).into()
    }
}
