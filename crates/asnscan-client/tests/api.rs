use asnscan_client::{AsnScanError, BgpViewClient};
use asnscan_core::BgpDirectory;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BgpViewClient {
    BgpViewClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn search_returns_candidates_in_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query_term", "example corp"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "status_message": "Query was successful",
            "data": {
                "asns": [
                    {"asn": 64512, "name": "EXAMPLE-A", "description": "Example Corp", "country_code": "US"},
                    {"asn": 64513, "name": "EXAMPLE-B"}
                ],
                "ipv4_prefixes": [],
                "ipv6_prefixes": []
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let asns = client_for(&server).search_asns("example corp").await.unwrap();
    let numbers: Vec<u32> = asns.iter().map(|a| a.asn).collect();
    assert_eq!(numbers, [64512, 64513]);
    assert_eq!(asns[1].name, "EXAMPLE-B");
}

#[tokio::test]
async fn search_with_no_matches_is_empty_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "data": {"asns": []}
        })))
        .mount(&server)
        .await;

    let asns = client_for(&server).search_asns("nobody").await.unwrap();
    assert!(asns.is_empty());
}

#[tokio::test]
async fn prefixes_are_fetched_per_asn() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asn/64512/prefixes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "data": {
                "ipv4_prefixes": [
                    {"prefix": "192.0.2.0/24", "ip": "192.0.2.0", "cidr": 24, "name": "TEST-NET-1"},
                    {"prefix": "198.51.100.0/24", "ip": "198.51.100.0", "cidr": 24}
                ],
                "ipv6_prefixes": [{"prefix": "2001:db8::/32"}]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let prefixes = client_for(&server).ipv4_prefixes(64512).await.unwrap();
    let cidrs: Vec<&str> = prefixes.iter().map(|p| p.prefix.as_str()).collect();
    assert_eq!(cidrs, ["192.0.2.0/24", "198.51.100.0/24"]);
    assert_eq!(prefixes[0].name.as_deref(), Some("TEST-NET-1"));
}

#[tokio::test]
async fn server_error_carries_status_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "status": "error",
            "status_message": "Internal failure"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search_asns("acme").await.unwrap_err();
    match err {
        AsnScanError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "Internal failure");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn not_found_and_rate_limit_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asn/1/prefixes"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such asn"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/asn/2/prefixes"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.ipv4_prefixes(1).await.unwrap_err();
    assert!(matches!(err, AsnScanError::NotFound { ref resource } if resource == "no such asn"));
    assert_eq!(client.ipv4_prefixes(2).await.unwrap_err().status_code(), Some(429));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"asns": [{"asn": "not-a-number", "name": "X"}]}
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).search_asns("x").await.unwrap_err();
    assert!(err.is_decode_error());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = BgpViewClient::builder()
        .base_url(uri)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let err = client.search_asns("x").await.unwrap_err();
    assert!(matches!(err, AsnScanError::Http(_) | AsnScanError::Timeout(_)));
}
