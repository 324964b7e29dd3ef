//! Transfer objects and the result envelope.
//!
//! Transfer objects are immutable, field-for-field copies of the domain
//! entities, used whenever data leaves the process (JSON responses, seed
//! files). All of them serialize with camelCase field names.
//!
//! - [`Envelope`] - `{isError, message, data}` wrapper used at every boundary
//! - [`CarrierDto`] / [`TrackerDto`] - snapshots of the matching entities
//! - [`DeliveryDto`] - carrier-reported delivery status, never transcoded

pub mod carrier;
pub mod delivery;
pub mod envelope;
pub mod tracker;

pub use carrier::CarrierDto;
pub use delivery::DeliveryDto;
pub use envelope::Envelope;
pub use tracker::TrackerDto;
