//! Integration tests for the GraphQL client.
//!
//! These tests verify the request envelope, GraphQL-level error handling and
//! sharing a client across tasks.

use std::collections::HashMap;
use std::sync::Arc;

use nerdgraph::clients::graphql::{GraphqlClient, GraphqlError};
use nerdgraph::{ApiKey, EndpointUrl, HttpError, NerdGraphConfig};
use serde_json::json;
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GraphqlClient {
    let config = NerdGraphConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .endpoint(EndpointUrl::new(format!("{}/graphql", server.uri())).unwrap())
        .build()
        .unwrap();
    GraphqlClient::new(&config).unwrap()
}

#[test]
fn test_graphql_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
}

#[test]
fn test_types_exported_at_crate_root() {
    let _: Option<nerdgraph::GraphqlClient> = None;
    let _: Option<nerdgraph::GraphqlError> = None;
    let _: Option<nerdgraph::NrqlClient> = None;
}

#[tokio::test]
async fn test_query_sends_document_and_variables() {
    let server = MockServer::start().await;
    let document = "query ($id: Int!) { actor { account(id: $id) { name } } }";

    Mock::given(method("POST"))
        .and(body_json(json!({"query": document, "variables": {"id": 5}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"actor": {"account": {"name": "Staging"}}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .query(document, Some(json!({"id": 5})), None)
        .await
        .unwrap();

    assert_eq!(response.body["data"]["actor"]["account"]["name"], "Staging");
}

#[tokio::test]
async fn test_query_without_variables_sends_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({"query": "{ actor { user { name } } }", "variables": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .query("{ actor { user { name } } }", None, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_query_with_custom_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("X-Query-Source", "integration-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HashMap::new();
    headers.insert("X-Query-Source".to_string(), "integration-test".to_string());

    let client = client_for(&server);
    client.query("{ actor { user { id } } }", None, Some(headers)).await.unwrap();
}

#[tokio::test]
async fn test_graphql_errors_are_returned_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Account 1 not found"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.query("{ actor { account(id: 1) { name } } }", None, None).await.unwrap();

    let errors = response.graphql_errors().unwrap();
    assert_eq!(errors[0]["message"], "Account 1 not found");
}

#[tokio::test]
async fn test_http_failure_maps_to_graphql_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"errors": [{"message": "Forbidden"}]})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client.query("{ actor { user { id } } }", None, None).await.unwrap_err();

    assert!(matches!(&error, GraphqlError::Http(HttpError::Response(e)) if e.code == 403));
    assert!(error.to_string().contains("Forbidden"));
}

#[tokio::test]
async fn test_graphql_client_can_be_shared_across_tasks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(3)
        .mount(&server)
        .await;

    let client = Arc::new(client_for(&server));
    let handles: Vec<_> = (0..3)
        .map(|_| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { client.query("{ actor { user { id } } }", None, None).await })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }
}
