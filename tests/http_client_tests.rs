//! Integration tests for the HTTP client.
//!
//! These tests verify header handling, status mapping and body parsing
//! against a mock NerdGraph endpoint.

use nerdgraph::clients::{DataType, HttpClient, HttpError, HttpRequest, InvalidHttpRequestError};
use nerdgraph::{ApiKey, EndpointUrl, NerdGraphConfig, Region};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> NerdGraphConfig {
    NerdGraphConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .endpoint(EndpointUrl::new(format!("{}/graphql", server.uri())).unwrap())
        .build()
        .unwrap()
}

fn json_request(body: serde_json::Value) -> HttpRequest {
    HttpRequest::builder()
        .body(body)
        .body_type(DataType::Json)
        .build()
        .unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_clients_for_different_regions_are_independent() {
    let us = NerdGraphConfig::builder()
        .api_key(ApiKey::new("key-us").unwrap())
        .build()
        .unwrap();
    let eu = NerdGraphConfig::builder()
        .api_key(ApiKey::new("key-eu").unwrap())
        .region(Region::Eu)
        .build()
        .unwrap();

    let us_client = HttpClient::new(&us).unwrap();
    let eu_client = HttpClient::new(&eu).unwrap();

    assert_eq!(us_client.endpoint(), "https://api.newrelic.com/graphql");
    assert_eq!(eu_client.endpoint(), "https://api.eu.newrelic.com/graphql");
    assert_eq!(
        us_client.default_headers().get("API-Key"),
        Some(&"key-us".to_string())
    );
    assert_eq!(
        eu_client.default_headers().get("API-Key"),
        Some(&"key-eu".to_string())
    );
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_request_posts_with_default_and_extra_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("API-Key", "test-key"))
        .and(header("Content-Type", "application/json"))
        .and(header("NewRelic-Requesting-Services", "reports"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest::builder()
        .body(json!({"query": "{ actor { user { id } } }"}))
        .body_type(DataType::Json)
        .header("NewRelic-Requesting-Services", "reports")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!({"data": {}}));
}

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let response = client.request(json_request(json!({}))).await.unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let request = HttpRequest {
        body: Some(json!({"query": "{}"})),
        body_type: None,
        extra_headers: None,
    };

    let result = client.request(request).await;
    assert!(matches!(
        result,
        Err(HttpError::InvalidRequest(
            InvalidHttpRequestError::MissingBodyType
        ))
    ));
}

// ============================================================================
// Error mapping
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error_with_reference() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .insert_header("x-request-id", "req-401")
                .set_body_json(json!({"errors": [{"message": "Invalid API key"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let error = client.request(json_request(json!({}))).await.unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 401);
            assert!(e.message.contains("Invalid API key"));
            assert!(e.message.contains("req-401"));
            assert_eq!(e.error_reference.as_deref(), Some("req-401"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_server_error_keeps_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let error = client.request(json_request(json!({}))).await.unwrap_err();

    assert_eq!(error.status(), Some(502));
    assert!(error.to_string().contains("Bad Gateway"));
}

#[tokio::test]
async fn test_requests_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({"error": "Too Many Requests"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(&config_for(&server)).unwrap();
    let error = client.request(json_request(json!({}))).await.unwrap_err();

    assert_eq!(error.status(), Some(429));
}
