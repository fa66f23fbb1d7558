use aishub_api::types::BoundingBox;
use aishub_api::{AreaQuery, Query, VesselQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

fn pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[test]
fn area_query_maps_longitude_to_x_and_latitude_to_y() {
    let url = AreaQuery::new(BoundingBox::new(10.0, 20.0, 30.0, 40.0)).add_to_url(&base_url());
    let params = pairs(&url);
    assert!(params.contains(&("xmin".to_string(), "30".to_string())));
    assert!(params.contains(&("xmax".to_string(), "40".to_string())));
    assert!(params.contains(&("ymin".to_string(), "10".to_string())));
    assert!(params.contains(&("ymax".to_string(), "20".to_string())));
}

#[test]
fn area_query_keeps_fractional_degrees() {
    let url =
        AreaQuery::new(BoundingBox::new(-0.25, 0.75, 103.125, 104.5)).add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("xmin=103.125"));
    assert!(query.contains("ymin=-0.25"));
}

#[test]
fn vessel_query_sends_mmsi_only() {
    let url = VesselQuery::new(366_999_712).add_to_url(&base_url());
    assert_eq!(url.query(), Some("mmsi=366999712"));
}

#[test]
fn query_paths() {
    let area = AreaQuery::new(BoundingBox::new(0.0, 1.0, 0.0, 1.0));
    assert_eq!(area.path(), "/vessels");
    assert_eq!(VesselQuery::new(1).path(), "/vessel");
}
