//! HTTP server initialization and runtime setup.
//!
//! Loads the seed data, builds the in-memory stores and use cases, and runs
//! the Axum server until Ctrl+C.

use crate::config::Config;
use crate::infrastructure::memory::{MemoryCarrierRepository, MemoryTrackerRepository, Seed};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Carrier and tracker stores (from `SEED_FILE`, or empty)
/// - Use cases in the server execution context
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The seed file cannot be read or parsed
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (carriers, trackers) = build_repositories(&config).await?;

    let tracker_count = trackers.len().await;
    tracing::info!(
        carriers = carriers.len(),
        trackers = tracker_count,
        read_only = trackers.is_read_only(),
        "Stores initialized"
    );

    let state = AppState::new(carriers, trackers);
    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the stores from the configured seed file, or empty ones.
pub async fn build_repositories(
    config: &Config,
) -> Result<(MemoryCarrierRepository, MemoryTrackerRepository)> {
    let seed = match config.seed_file {
        Some(ref path) => {
            let seed = Seed::load(path).await?;
            tracing::info!("Loaded seed file {}", path.display());
            seed
        }
        None => Seed::default(),
    };

    Ok(seed.into_repositories(config.read_only))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_build_repositories_without_seed() {
        let config = Config::default();

        let (carriers, trackers) = build_repositories(&config).await.unwrap();

        assert!(carriers.is_empty());
        assert_eq!(trackers.len().await, 0);
        assert!(!trackers.is_read_only());
    }

    #[tokio::test]
    async fn test_build_repositories_from_seed_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "carriers": [{{"id": "kr.epost", "no": 1, "name": "epost",
                              "displayName": "Korea Post", "isCrawlable": true,
                              "isPopupEnabled": false, "popupURL": ""}}],
                "trackers": [{{"id": "1", "carrierId": "kr.epost", "label": "Keyboard",
                              "trackingNumber": "123456", "memos": []}}]
            }}"#
        )
        .unwrap();

        let config = Config {
            seed_file: Some(file.path().to_path_buf()),
            read_only: true,
            ..Config::default()
        };

        let (carriers, trackers) = build_repositories(&config).await.unwrap();

        assert_eq!(carriers.len(), 1);
        assert_eq!(trackers.len().await, 1);
        assert!(trackers.is_read_only());
    }

    #[tokio::test]
    async fn test_build_repositories_rejects_malformed_seed() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let config = Config {
            seed_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };

        assert!(build_repositories(&config).await.is_err());
    }
}
