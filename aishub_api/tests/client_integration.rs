use aishub_api::types::BoundingBox;
use aishub_api::{AreaQuery, Client, Error, ErrorKind, VesselQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn area() -> AreaQuery {
    AreaQuery::new(BoundingBox::new(20.0, 30.0, 30.0, 40.0))
}

#[tokio::test]
async fn get_vessels_in_area_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("vessels.json");

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("output", "json"))
        .and(query_param("xmin", "30"))
        .and(query_param("xmax", "40"))
        .and(query_param("ymin", "20"))
        .and(query_param("ymax", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let vessels = client.get_vessels_in_area(&area()).await.unwrap();

    assert_eq!(vessels.len(), 3);
    assert_eq!(vessels[0].id, "vessel_244660000");
    assert_eq!(vessels[0].name, "NORDIC SPIRIT");
    assert_eq!(vessels[1].name, "Unknown Vessel");
    assert_eq!(vessels[2].source, "AIS Hub");
}

#[tokio::test]
async fn get_vessels_in_area_without_result_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let vessels = client.get_vessels_in_area(&area()).await.unwrap();
    assert!(vessels.is_empty());
}

#[tokio::test]
async fn get_vessels_in_area_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let err = client.get_vessels_in_area(&area()).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn get_vessels_in_area_provider_error() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("provider_error.json");

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let err = client.get_vessels_in_area(&area()).await.unwrap_err();
    assert!(matches!(err, Error::Provider(ref msg) if msg == "Too frequent requests!"));
}

#[tokio::test]
async fn get_vessels_in_area_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let err = client.get_vessels_in_area(&area()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn get_vessels_in_area_malformed_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result": "nope"}"#))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let err = client.get_vessels_in_area(&area()).await.unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[tokio::test]
async fn get_vessels_in_area_skips_unreadable_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessels"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"result": [
                {"MMSI": 244660000, "ShipName": "NORDIC SPIRIT", "Latitude": 24.3, "Longitude": 35.1},
                {"MMSI": 636019825, "ShipName": "NO POSITION"}
            ]}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let vessels = client.get_vessels_in_area(&area()).await.unwrap();
    assert_eq!(vessels.len(), 1);
    assert_eq!(vessels[0].id, "vessel_244660000");
}

#[tokio::test]
async fn get_vessel_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("vessel_single.json");

    Mock::given(method("GET"))
        .and(path("/vessel"))
        .and(query_param("mmsi", "244660000"))
        .and(query_param("output", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let vessel = client
        .get_vessel(&VesselQuery::new(244660000))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vessel.id, "vessel_244660000");
    assert_eq!(vessel.speed, 12.4);
}

#[tokio::test]
async fn get_vessel_empty_result_is_none() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("vessels_minimal.json");

    Mock::given(method("GET"))
        .and(path("/vessel"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let vessel = client.get_vessel(&VesselQuery::new(1)).await.unwrap();
    assert!(vessel.is_none());
}

#[tokio::test]
async fn get_vessel_missing_result_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vessel"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let err = client.get_vessel(&VesselQuery::new(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    // Nothing listens on port 1.
    let client = Client::with_base_url("http://127.0.0.1:1", "test-key").unwrap();
    let err = client.get_vessels_in_area(&area()).await.unwrap_err();
    assert!(matches!(err, Error::RequestFailed(_)));
    assert!(!err.to_string().contains("test-key"));
}
