//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service status with a summary of each in-memory store.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "carriers": { "status": "ok", "message": "3 carriers loaded" },
///     "trackers": { "status": "ok", "message": "2 trackers stored, read-only" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let carriers = check_carriers(&state);
    let trackers = check_trackers(&state).await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { carriers, trackers },
    })
}

fn check_carriers(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} carriers loaded",
            state.carrier_repository.len()
        )),
    }
}

async fn check_trackers(state: &AppState) -> CheckStatus {
    let count = state.tracker_repository.len().await;
    let mode = if state.tracker_repository.is_read_only() {
        "read-only"
    } else {
        "read-write"
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("{count} trackers stored, {mode}")),
    }
}
