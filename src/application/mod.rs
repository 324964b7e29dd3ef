//! Application layer orchestrating repositories for the presentation layer.
//!
//! Use cases coordinate repository calls, pick the output representation
//! from the injected [`context::ExecutionContext`], and sequence tracker
//! mutations before persisting them.
//!
//! # Available Use Cases
//!
//! - [`use_cases::CarrierUseCase`] - Carrier listing
//! - [`use_cases::TrackerUseCase`] - Tracker storage, mutations, and delivery lookups

pub mod context;
pub mod use_cases;
