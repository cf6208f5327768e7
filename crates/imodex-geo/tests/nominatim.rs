//! Integration tests for `NominatimClient` using wiremock HTTP mocks.

use imodex_geo::{CachedGeocoder, Geocoder, NominatimClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> NominatimClient {
    NominatimClient::with_base_url(base_url, 5, "imodex-tests/0.1")
        .expect("client construction should not fail")
}

fn porto_candidate() -> serde_json::Value {
    serde_json::json!([
        {
            "place_id": 1,
            "lat": "41.1523",
            "lon": "-8.6254",
            "display_name": "Cedofeita, Porto, Portugal",
            "address": {
                "suburb": "Cedofeita",
                "city": "Porto",
                "state": "Porto",
                "country": "Portugal"
            }
        }
    ])
}

#[tokio::test]
async fn search_parses_first_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Cedofeita, Porto, Portugal"))
        .and(query_param("format", "json"))
        .and(query_param("addressdetails", "1"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(porto_candidate()))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resolved = client
        .search("Cedofeita, Porto")
        .await
        .expect("request should succeed")
        .expect("candidate should parse");

    assert_eq!(resolved.district.as_deref(), Some("Porto"));
    assert_eq!(resolved.municipality.as_deref(), Some("Porto"));
    assert_eq!(resolved.parish.as_deref(), Some("Cedofeita"));
    let coordinates = resolved.coordinates.expect("coordinates should be set");
    assert!((coordinates.lat - 41.1523).abs() < 1e-9);
    assert!((coordinates.lng - -8.6254).abs() < 1e-9);
}

#[tokio::test]
async fn empty_candidate_list_is_a_normal_absence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resolved = client
        .search("Vilarinho das Furnas")
        .await
        .expect("request should succeed");
    assert!(resolved.is_none());
}

#[tokio::test]
async fn server_error_is_swallowed_at_the_port_boundary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    // The typed path reports the failure...
    assert!(client.search("Porto").await.is_err());
    // ...but the port degrades it to absence.
    assert!(client.geocode("Porto").await.is_none());
}

#[tokio::test]
async fn malformed_body_is_swallowed_at_the_port_boundary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    assert!(client.geocode("Porto").await.is_none());
}

#[tokio::test]
async fn cached_client_issues_at_most_one_request_per_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(porto_candidate()))
        .expect(1)
        .mount(&server)
        .await;

    let geocoder = CachedGeocoder::new(test_client(&server.uri()), 16);
    let first = geocoder.geocode("Cedofeita, Porto").await;
    let second = geocoder.geocode("Cedofeita, Porto").await;

    assert_eq!(first, second);
    assert!(first.is_some());
    // Mock expectation (exactly one request) is verified on drop.
}

#[tokio::test]
async fn negative_results_are_cached_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let geocoder = CachedGeocoder::new(test_client(&server.uri()), 16);
    assert!(geocoder.geocode("Lugar Perdido").await.is_none());
    assert!(geocoder.geocode("Lugar Perdido").await.is_none());
}
