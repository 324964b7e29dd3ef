#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use parcel_tracker::api::handlers::health_handler;
use parcel_tracker::api::routes::api_routes;
use parcel_tracker::domain::entities::Carrier;
use parcel_tracker::domain::values::{DeliveryLocation, DeliveryProgress, DeliveryState};
use parcel_tracker::dto::{DeliveryDto, TrackerDto};
use parcel_tracker::infrastructure::memory::{MemoryCarrierRepository, MemoryTrackerRepository};
use parcel_tracker::state::AppState;

pub fn sample_carriers() -> Vec<Carrier> {
    vec![
        Carrier::new("kr.epost", 1, "epost", "Korea Post", true, false, ""),
        Carrier::new(
            "kr.logen",
            2,
            "logen",
            "Logen",
            false,
            true,
            "https://logen.example/track",
        ),
    ]
}

pub fn sample_trackers() -> Vec<TrackerDto> {
    vec![
        TrackerDto::new(
            "1",
            "kr.epost",
            "Keyboard",
            "123456",
            vec!["m1".to_string(), "m2".to_string()],
        ),
        TrackerDto::new("2", "kr.logen", "Monitor", "987654", vec![]),
    ]
}

pub fn sample_delivery() -> DeliveryDto {
    DeliveryDto::new(
        DeliveryLocation::new("Seoul Hub", "2024-05-01T09:00:00+09:00"),
        DeliveryLocation::new("Busan", ""),
        vec![DeliveryProgress {
            time: "2024-05-01T09:00:00+09:00".to_string(),
            location: DeliveryLocation::new("Seoul Hub", ""),
            state: DeliveryState::new("at_pickup", "Picked up"),
            description: "Picked up".to_string(),
        }],
        DeliveryState::new("in_transit", "In transit"),
    )
}

fn tracker_repository(read_only: bool) -> MemoryTrackerRepository {
    let repo = if read_only {
        MemoryTrackerRepository::read_only(sample_trackers())
    } else {
        MemoryTrackerRepository::new(sample_trackers())
    };
    repo.with_delivery("kr.epost", "123456", sample_delivery())
}

pub fn create_test_state(read_only: bool) -> AppState {
    AppState::new(
        MemoryCarrierRepository::new(sample_carriers()),
        tracker_repository(read_only),
    )
}

pub fn make_server_with(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn make_server() -> TestServer {
    make_server_with(create_test_state(false))
}

pub fn make_read_only_server() -> TestServer {
    make_server_with(create_test_state(true))
}
