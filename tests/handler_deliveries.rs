mod common;

#[tokio::test]
async fn test_delivery_lookup_success() {
    let server = common::make_server();

    let response = server.get("/api/deliveries/kr.epost/123456").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["isError"], false);
    assert_eq!(json["data"]["from"]["name"], "Seoul Hub");
    assert_eq!(json["data"]["to"]["name"], "Busan");
    assert_eq!(json["data"]["state"]["id"], "in_transit");
    assert_eq!(json["data"]["progresses"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["progresses"][0]["description"], "Picked up");
}

#[tokio::test]
async fn test_delivery_unknown_carrier() {
    let server = common::make_server();

    let response = server.get("/api/deliveries/xx.unknown/123456").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["isError"], true);
    assert_eq!(json["message"], "carrier not found: xx.unknown");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn test_delivery_unknown_tracking_number() {
    let server = common::make_server();

    let response = server.get("/api/deliveries/kr.epost/000000").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["isError"], true);
    assert_eq!(json["message"], "delivery not found: kr.epost/000000");
}

#[tokio::test]
async fn test_delivery_lookup_allowed_when_read_only() {
    let server = common::make_read_only_server();

    let response = server.get("/api/deliveries/kr.epost/123456").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["isError"], false);
    assert_eq!(json["data"]["state"]["name"], "In transit");
}
