//! Request and response bodies specific to the HTTP API.
//!
//! Carrier, tracker, and delivery payloads reuse the transfer objects in
//! [`crate::dto`]; only shapes that exist purely for HTTP live here.

pub mod health;
pub mod mutation;
