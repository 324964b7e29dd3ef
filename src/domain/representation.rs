//! Tagged entity-or-transfer-object payloads.

use crate::domain::entities::{Carrier, Tracker};
use crate::dto::{CarrierDto, TrackerDto};

/// A record in one of its two shapes.
///
/// Repositories are free to hand back either live entities or transfer
/// objects for the same call; this tag makes the shape explicit so the use
/// cases can normalize without guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation<E, D> {
    Entity(E),
    Transfer(D),
}

/// Carrier record as returned by a carrier repository.
pub type CarrierRecord = Representation<Carrier, CarrierDto>;

/// Tracker record as returned by a tracker repository.
pub type TrackerRecord = Representation<Tracker, TrackerDto>;

impl<E, D> Representation<E, D>
where
    E: From<D>,
    D: From<E>,
{
    /// Rebuilds the record as an entity, copying every field.
    pub fn into_entity(self) -> E {
        match self {
            Self::Entity(entity) => entity,
            Self::Transfer(dto) => E::from(dto),
        }
    }

    /// Rebuilds the record as a transfer object, copying every field.
    pub fn into_transfer(self) -> D {
        match self {
            Self::Entity(entity) => D::from(entity),
            Self::Transfer(dto) => dto,
        }
    }

    /// Rebuilds the record in the requested shape.
    pub fn normalize(self, as_transfer: bool) -> Self {
        if as_transfer {
            Self::Transfer(self.into_transfer())
        } else {
            Self::Entity(self.into_entity())
        }
    }

    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::Transfer(_))
    }
}
