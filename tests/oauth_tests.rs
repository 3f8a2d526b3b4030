//! Integration tests for the OAuth install flow and webhook verification.
//!
//! These tests chain the public API the way an app would during install:
//! authorization URL generation, callback signature verification, trading
//! the code for a token against a mock server, token exchange, uninstall,
//! and verifying webhook deliveries signed with the app secret.

use serde::{Deserialize, Serialize};
use serde_json::json;
use shopify_rest::auth::oauth::{
    authorize_url, compute_signature, compute_signature_base64, exchange_token_with,
    get_access_token_with, uninstall_with, verify_callback_params, OAuthError,
    RequestedTokenType, StateParam,
};
use shopify_rest::clients::HttpClient;
use shopify_rest::webhooks::{
    verify_webhook, verify_webhook_verbose, WebhookError, WebhookRequest,
};
use shopify_rest::{ApiKey, ApiSecretKey, AppConfig, AuthScopes, HostUrl, ShopDomain};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_SECRET: &str = "app-secret";

fn test_config() -> AppConfig {
    AppConfig::builder()
        .api_key(ApiKey::new("app-api-key").unwrap())
        .api_secret_key(ApiSecretKey::new(API_SECRET).unwrap())
        .redirect_url(HostUrl::new("https://app.example.com/auth/callback").unwrap())
        .scopes("read_products,write_orders".parse().unwrap())
        .build()
        .unwrap()
}

fn shop_root_client(server: &MockServer) -> HttpClient {
    HttpClient::with_base_uri(server.uri(), "", "", None)
}

/// Signs callback query pairs the way a shop does: sorted by key, joined
/// as `key=value` with `&`, HMAC-SHA256 hex under the app secret.
fn sign_callback(params: &mut Vec<(String, String)>, secret: &str) {
    let mut sorted: Vec<&(String, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let message = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let hmac = compute_signature(&message, secret);
    params.push(("hmac".to_string(), hmac));
}

fn callback_params(code: &str, state: &str) -> Vec<(String, String)> {
    vec![
        ("code".to_string(), code.to_string()),
        ("shop".to_string(), "test-shop.myshopify.com".to_string()),
        ("state".to_string(), state.to_string()),
        ("timestamp".to_string(), "1715000000".to_string()),
    ]
}

// ============================================================================
// Install Flow
// ============================================================================

#[tokio::test]
async fn test_install_flow_from_authorize_to_access_token() {
    let config = test_config();
    let shop = ShopDomain::new("test-shop").unwrap();
    let state = StateParam::new();

    // Step 1: send the merchant to the authorization URL.
    let url = authorize_url(&config, &shop, &state).unwrap();
    assert!(url.starts_with("https://test-shop.myshopify.com/admin/oauth/authorize?"));
    assert!(url.contains("client_id=app-api-key"));
    assert!(url.contains(&format!("state={}", state.nonce())));

    // Step 2: the shop redirects back with signed query parameters.
    let mut params = callback_params("auth-code-456", state.nonce());
    sign_callback(&mut params, API_SECRET);
    assert!(verify_callback_params(&config, &params));

    // Step 3: trade the code for an access token.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_partial_json(json!({
            "client_id": "app-api-key",
            "client_secret": API_SECRET,
            "code": "auth-code-456",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "shpat_install_flow",
            "scope": "read_products,write_orders",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = shop_root_client(&mock_server);
    let token = get_access_token_with(&client, &config, "auth-code-456")
        .await
        .unwrap();

    assert_eq!(token.access_token, "shpat_install_flow");

    // Step 4: confirm the granted scopes cover what the app asked for.
    let granted: AuthScopes = token.scope.parse().unwrap();
    assert!(granted.covers(config.scopes()));
}

#[test]
fn test_callback_with_tampered_shop_is_rejected() {
    let config = test_config();

    let mut params = callback_params("auth-code-456", "nonce");
    sign_callback(&mut params, API_SECRET);

    for (key, value) in &mut params {
        if key.as_str() == "shop" {
            *value = "evil-shop.myshopify.com".to_string();
        }
    }

    assert!(!verify_callback_params(&config, &params));
}

#[test]
fn test_callback_signed_with_rotated_secret_is_accepted() {
    let config = AppConfig::builder()
        .api_key(ApiKey::new("app-api-key").unwrap())
        .api_secret_key(ApiSecretKey::new("new-secret").unwrap())
        .old_api_secret_key(ApiSecretKey::new("old-secret").unwrap())
        .build()
        .unwrap();

    // A callback signed before the rotation still verifies.
    let mut params = callback_params("auth-code-456", "nonce");
    sign_callback(&mut params, "old-secret");

    assert!(verify_callback_params(&config, &params));
}

#[test]
fn test_state_data_survives_the_callback_round_trip() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct InstallContext {
        return_to: String,
        plan: String,
    }

    let context = InstallContext {
        return_to: "/dashboard".to_string(),
        plan: "growth".to_string(),
    };

    let config = test_config();
    let shop = ShopDomain::new("test-shop").unwrap();
    let state = StateParam::with_data(&context);

    let url = authorize_url(&config, &shop, &state).unwrap();
    assert!(url.contains("state="));

    // The callback hands the state back as an opaque string.
    let received = StateParam::from_raw(state.nonce());
    assert_eq!(received.extract_data::<InstallContext>(), Some(context));
}

// ============================================================================
// Token Exchange
// ============================================================================

#[tokio::test]
async fn test_online_token_exchange_carries_associated_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_partial_json(json!({
            "grant_type": "urn:ietf:params:oauth:grant-type:token-exchange",
            "subject_token": "session-id-token",
            "subject_token_type": "urn:ietf:params:oauth:token-type:id_token",
            "requested_token_type": "urn:shopify:params:oauth:token-type:online-access-token",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "shpat_online",
            "scope": "read_products,write_orders",
            "expires_in": 86399,
            "associated_user_scope": "read_products",
            "associated_user": {
                "id": 902_541_635_u64,
                "first_name": "Jane",
                "last_name": "Doe",
                "email": "jane@example.com",
                "email_verified": true,
                "account_owner": false,
                "locale": "en",
                "collaborator": true,
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = shop_root_client(&mock_server);
    let config = test_config();

    let token = exchange_token_with(
        &client,
        &config,
        "session-id-token",
        RequestedTokenType::OnlineAccessToken,
    )
    .await
    .unwrap();

    assert_eq!(token.access_token, "shpat_online");
    assert_eq!(token.expires_in, Some(86399));
    assert_eq!(token.associated_user_scope.as_deref(), Some("read_products"));

    let user = token.associated_user.unwrap();
    assert_eq!(user.id, 902_541_635);
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.email, "jane@example.com");
    assert!(user.collaborator);
    assert!(!user.account_owner);
}

#[tokio::test]
async fn test_offline_token_exchange_requests_offline_urn() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_partial_json(json!({
            "requested_token_type": "urn:shopify:params:oauth:token-type:offline-access-token",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "shpat_offline",
            "scope": "read_products",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = shop_root_client(&mock_server);
    let config = test_config();

    let token = exchange_token_with(
        &client,
        &config,
        "session-id-token",
        RequestedTokenType::OfflineAccessToken,
    )
    .await
    .unwrap();

    assert_eq!(token.access_token, "shpat_offline");
    assert!(token.expires_in.is_none());
    assert!(token.associated_user.is_none());
}

#[tokio::test]
async fn test_rejected_code_surfaces_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "invalid_request", "error_description": "Could not find Shopify API application"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = shop_root_client(&mock_server);
    let config = test_config();

    let error = get_access_token_with(&client, &config, "expired-code")
        .await
        .unwrap_err();

    match error {
        OAuthError::TokenExchangeFailed { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("invalid_request"));
        }
        other => panic!("Expected TokenExchangeFailed, got {other:?}"),
    }
}

// ============================================================================
// Uninstall
// ============================================================================

#[tokio::test]
async fn test_uninstall_revokes_api_permissions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/api_permissions/current.json"))
        .and(header("x-shopify-access-token", "shpat_offline"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_base_uri(mock_server.uri(), "", "shpat_offline", None);

    uninstall_with(&client).await.unwrap();
}

#[tokio::test]
async fn test_uninstall_with_revoked_token_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/admin/api_permissions/current.json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"errors": "Invalid API key or access token"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_base_uri(mock_server.uri(), "", "stale-token", None);

    let error = uninstall_with(&client).await.unwrap_err();

    match error {
        OAuthError::UninstallFailed { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid API key"));
        }
        other => panic!("Expected UninstallFailed, got {other:?}"),
    }
}

// ============================================================================
// Webhook Deliveries
// ============================================================================

fn delivery(body: &[u8], secret: &str) -> WebhookRequest {
    WebhookRequest::new(
        body.to_vec(),
        Some(compute_signature_base64(body, secret)),
        Some("orders/create".to_string()),
        Some("test-shop.myshopify.com".to_string()),
        Some("2025-10".to_string()),
        Some("delivery-001".to_string()),
    )
}

#[test]
fn test_webhook_delivery_round_trip() {
    let config = test_config();
    let body = br#"{"id":450789469,"topic":"orders/create"}"#;

    let request = delivery(body, API_SECRET);
    assert!(verify_webhook(&config, &request));
    assert_eq!(request.topic(), Some("orders/create"));
    assert_eq!(request.shop_domain(), Some("test-shop.myshopify.com"));
    assert_eq!(request.webhook_id(), Some("delivery-001"));

    // A modified body no longer matches the signature.
    let tampered = WebhookRequest::new(
        br#"{"id":450789469,"topic":"orders/delete"}"#.to_vec(),
        request.hmac_header().map(str::to_string),
        None,
        None,
        None,
        None,
    );
    assert!(!verify_webhook(&config, &tampered));
    assert!(matches!(
        verify_webhook_verbose(&config, &tampered),
        Err(WebhookError::DigestMismatch { .. })
    ));
}

#[test]
fn test_webhook_delivery_without_hmac_header_is_rejected() {
    let config = test_config();

    let request = WebhookRequest::new(b"payload".to_vec(), None, None, None, None, None);

    assert!(!verify_webhook(&config, &request));
    assert_eq!(
        verify_webhook_verbose(&config, &request),
        Err(WebhookError::MissingHmacHeader)
    );
}

#[test]
fn test_webhook_delivery_after_secret_rotation() {
    let config = AppConfig::builder()
        .api_key(ApiKey::new("app-api-key").unwrap())
        .api_secret_key(ApiSecretKey::new("new-secret").unwrap())
        .old_api_secret_key(ApiSecretKey::new("old-secret").unwrap())
        .build()
        .unwrap();

    let body = b"webhook payload";

    // Deliveries signed with either secret verify during rotation.
    assert!(verify_webhook(&config, &delivery(body, "new-secret")));
    assert!(verify_webhook(&config, &delivery(body, "old-secret")));
    assert!(!verify_webhook(&config, &delivery(body, "unrelated-secret")));
}
