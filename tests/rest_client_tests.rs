//! Integration tests for the REST API client.
//!
//! These tests verify client construction, API version selection, path
//! normalization over the wire, and REST-specific error handling.

use serde_json::json;
use shopify_rest::clients::rest::{RestClient, RestError};
use shopify_rest::{ApiKey, ApiSecretKey, ApiVersion, AppConfig, ShopDomain};
use std::collections::HashMap;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn orders_path(version: &ApiVersion) -> String {
    format!("/admin/api/{version}/orders.json")
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_rest_client_uses_latest_version_by_default() {
    let shop = ShopDomain::new("test-shop").unwrap();
    let client = RestClient::new(&shop, "test-token", None);

    assert_eq!(client.api_version(), &ApiVersion::latest());
}

#[test]
fn test_rest_client_takes_version_from_config() {
    let config = AppConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
        .api_version(ApiVersion::V2025_01)
        .build()
        .unwrap();

    let shop = ShopDomain::new("test-shop").unwrap();
    let client = RestClient::new(&shop, "test-token", Some(&config));

    assert_eq!(client.api_version(), &ApiVersion::V2025_01);
}

#[test]
fn test_rest_client_with_version_override() {
    let shop = ShopDomain::new("test-shop").unwrap();
    let client = RestClient::with_version(&shop, "test-token", None, ApiVersion::V2024_10);

    assert_eq!(client.api_version(), &ApiVersion::V2024_10);
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// Path Normalization over the Wire
// ============================================================================

#[tokio::test]
async fn test_path_normalization_produces_same_request() {
    let mock_server = MockServer::start().await;
    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", None);

    // "orders", "/orders" and "orders.json" all normalize to the same URL.
    Mock::given(method("GET"))
        .and(path(orders_path(client.api_version())))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(3)
        .mount(&mock_server)
        .await;

    client.get("orders", None).await.unwrap();
    client.get("/orders", None).await.unwrap();
    client.get("orders.json", None).await.unwrap();
}

#[tokio::test]
async fn test_nested_paths_are_preserved() {
    let mock_server = MockServer::start().await;
    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", None);

    Mock::given(method("GET"))
        .and(path(format!(
            "/admin/api/{}/orders/450789469/transactions.json",
            client.api_version()
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"transactions": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .get("orders/450789469/transactions", None)
        .await
        .unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_config_version_changes_request_path() {
    let mock_server = MockServer::start().await;

    let config = AppConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
        .api_version(ApiVersion::V2024_10)
        .build()
        .unwrap();

    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", Some(&config));

    Mock::given(method("GET"))
        .and(path("/admin/api/2024-10/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client.get("orders", None).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_empty_path_is_rejected_without_request() {
    let client = RestClient::with_base_uri("http://localhost:3000", "test-token", None);

    for bad_path in ["", "/", ".json", "/.json"] {
        let result = client.get(bad_path, None).await;
        assert!(
            matches!(result, Err(RestError::InvalidPath { .. })),
            "path {bad_path:?} should be rejected"
        );
    }
}

// ============================================================================
// Request Forwarding Tests
// ============================================================================

#[tokio::test]
async fn test_get_sends_access_token_and_query() {
    let mock_server = MockServer::start().await;
    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", None);

    Mock::given(method("GET"))
        .and(path(orders_path(client.api_version())))
        .and(header("x-shopify-access-token", "test-token"))
        .and(query_param("status", "any"))
        .and(query_param("limit", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut query = HashMap::new();
    query.insert("status".to_string(), "any".to_string());
    query.insert("limit".to_string(), "50".to_string());

    let response = client.get("orders", Some(query)).await.unwrap();
    assert!(response.is_ok());
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let mock_server = MockServer::start().await;
    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", None);

    Mock::given(method("POST"))
        .and(path(orders_path(client.api_version())))
        .and(body_json(json!({"order": {"email": "customer@example.com"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "order": {"id": 450789469, "email": "customer@example.com"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .post(
            "orders",
            json!({"order": {"email": "customer@example.com"}}),
            None,
        )
        .await
        .unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["order"]["id"], 450789469);
}

#[tokio::test]
async fn test_put_sends_json_body() {
    let mock_server = MockServer::start().await;
    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", None);

    Mock::given(method("PUT"))
        .and(path(format!(
            "/admin/api/{}/orders/450789469.json",
            client.api_version()
        )))
        .and(body_json(json!({"order": {"note": "Updated note"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {"id": 450789469, "note": "Updated note"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .put(
            "orders/450789469",
            json!({"order": {"note": "Updated note"}}),
            None,
        )
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body["order"]["note"], "Updated note");
}

#[tokio::test]
async fn test_delete_request() {
    let mock_server = MockServer::start().await;
    let client = RestClient::with_base_uri(mock_server.uri(), "test-token", None);

    Mock::given(method("DELETE"))
        .and(path(format!(
            "/admin/api/{}/recurring_application_charges/455696195.json",
            client.api_version()
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client
        .delete("recurring_application_charges/455696195", None)
        .await
        .unwrap();
    assert!(response.is_ok());
}

// ============================================================================
// Error Type Tests
// ============================================================================

#[test]
fn test_rest_error_invalid_path_message() {
    let error = RestError::InvalidPath {
        path: String::new(),
    };

    assert!(error.to_string().contains("Invalid REST API path"));
}

#[test]
fn test_rest_error_wraps_http_errors() {
    use shopify_rest::clients::{HttpError, HttpResponseError};

    let http_error = HttpError::Response(HttpResponseError {
        code: 404,
        message: r#"{"error":"Not Found"}"#.to_string(),
        error_reference: Some("abc-123".to_string()),
    });

    let rest_error = RestError::Http(http_error);

    assert!(rest_error.to_string().contains("Not Found"));
}

// ============================================================================
// Type Export Tests
// ============================================================================

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(shopify_rest::RestClient) = |_| {};
    let _: fn(shopify_rest::RestError) = |_| {};
}

#[test]
fn test_types_exported_from_clients_module() {
    let _: fn(shopify_rest::clients::RestClient) = |_| {};
    let _: fn(shopify_rest::clients::RestError) = |_| {};
}

#[test]
fn test_types_exported_from_clients_rest_module() {
    let _: fn(shopify_rest::clients::rest::RestClient) = |_| {};
    let _: fn(shopify_rest::clients::rest::RestError) = |_| {};
}
