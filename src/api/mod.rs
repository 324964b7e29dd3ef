//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into use-case calls and sends the
//! resulting envelopes back as JSON.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies that exist only for HTTP
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`response`] - Envelope to response conversion
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
