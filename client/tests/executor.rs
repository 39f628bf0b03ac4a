//! # HTTP Executor Tests
//!
//! Drives `ApiClient` against a mock backend and checks response normalization.

mod common;

use std::time::Duration;

use banking_client::core::error::TransportError;
use banking_client::core::http::{HttpMethod, HttpRequest};
use banking_client::core::service::HttpExecutor;
use banking_client::services::api::ApiClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> ApiClient {
    ApiClient::with_timeout(Some(Duration::from_secs(5))).unwrap()
}

#[tokio::test]
async fn test_success_response_is_parsed() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/bills/validate"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"biller_id": "ikedc", "customer_id": "123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(json!({"customer_name": "Ada"}))))
        .expect(1)
        .mount(&server)
        .await;

    // Act
    let response = client()
        .execute(
            HttpRequest::new(HttpMethod::Post, format!("{}/api/bills/validate", server.uri()))
                .json(Some(json!({"biller_id": "ikedc", "customer_id": "123"}))),
        )
        .await
        .unwrap();

    // Assert
    assert!(response.ok);
    assert_eq!(response.status, 200);
    assert_eq!(response.json.unwrap()["data"]["customer_name"], "Ada");
}

#[tokio::test]
async fn test_error_status_is_not_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/accounts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "Ledger unavailable"})))
        .mount(&server)
        .await;

    let response = client()
        .execute(HttpRequest::new(HttpMethod::Get, format!("{}/api/accounts", server.uri())))
        .await
        .unwrap();

    assert!(!response.ok);
    assert_eq!(response.status, 500);
    assert_eq!(response.json, Some(json!({"message": "Ledger unavailable"})));
}

#[tokio::test]
async fn test_non_json_body_yields_no_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/gold/price"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let response = client()
        .execute(HttpRequest::new(HttpMethod::Get, format!("{}/api/gold/price", server.uri())))
        .await
        .unwrap();

    assert!(!response.ok);
    assert_eq!(response.status, 502);
    assert!(response.json.is_none());
}

#[tokio::test]
async fn test_bearer_token_and_query_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transfers"))
        .and(header("authorization", "Bearer secret-token"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let response = client()
        .execute(
            HttpRequest::new(HttpMethod::Get, format!("{}/api/transfers", server.uri()))
                .bearer(Some("secret-token".to_string()))
                .json(Some(json!({"page": 2}))),
        )
        .await
        .unwrap();

    assert!(response.ok);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let url = format!("{}/accounts", common::closed_port_url());

    let err = client()
        .execute(HttpRequest::new(HttpMethod::Get, url))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Connect(_)), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/loans"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = ApiClient::with_timeout(Some(Duration::from_millis(200))).unwrap();
    let err = client
        .execute(HttpRequest::new(HttpMethod::Get, format!("{}/api/loans", server.uri())))
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout(_)), "unexpected error: {:?}", err);
}
