//! Envelope-to-HTTP conversion.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::dto::Envelope;

/// Envelopes are always sent with `200 OK`.
///
/// Clients branch on `isError`, not on the status code, so a repository
/// failure and a successful lookup arrive the same way on the wire.
impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
