//! OAuth access token acquisition.
//!
//! Two flows are supported:
//!
//! - The authorization code grant ([`get_access_token`]): trades the `code`
//!   callback parameter for a permanent offline access token.
//! - Token exchange ([`exchange_offline_token`], [`exchange_online_token`]):
//!   trades a session ID token for an access token without a redirect
//!   round trip, per RFC 8693.
//!
//! Both flows post to the same shop-level token endpoint. The functions in
//! this module come in pairs: a convenience form that builds a client from
//! the shop domain, and a `_with` form that takes a prepared shop-root
//! [`HttpClient`] for callers that route traffic elsewhere.

use serde::Deserialize;
use serde_json::json;

use crate::auth::oauth::error::OAuthError;
use crate::auth::AssociatedUser;
use crate::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::{AppConfig, ShopDomain};

/// Path of the access token endpoint, relative to the shop root.
pub const ACCESS_TOKEN_PATH: &str = "admin/oauth/access_token";

/// Path of the API permissions endpoint used to uninstall an app.
const UNINSTALL_PATH: &str = "admin/api_permissions/current.json";

/// Grant type identifying an OAuth 2.0 token exchange (RFC 8693).
const TOKEN_EXCHANGE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:token-exchange";

/// Subject token type identifying a Shopify session ID token.
const ID_TOKEN_TYPE: &str = "urn:ietf:params:oauth:token-type:id_token";

/// The kind of access token requested during token exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestedTokenType {
    /// An online token tied to an individual user session. Expires, and
    /// carries the associated user in the response.
    OnlineAccessToken,
    /// An offline token tied to the shop. Does not expire.
    OfflineAccessToken,
}

impl RequestedTokenType {
    /// Returns the URN Shopify expects in the `requested_token_type` field.
    #[must_use]
    pub const fn as_urn(self) -> &'static str {
        match self {
            Self::OnlineAccessToken => "urn:shopify:params:oauth:token-type:online-access-token",
            Self::OfflineAccessToken => "urn:shopify:params:oauth:token-type:offline-access-token",
        }
    }
}

/// A successful response from the access token endpoint.
///
/// Offline tokens carry only `access_token` and `scope`. Online tokens
/// additionally carry `expires_in`, `associated_user_scope`, and
/// `associated_user`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AccessTokenResponse {
    /// The access token for API requests.
    pub access_token: String,
    /// Comma-separated scopes granted to the token.
    #[serde(default)]
    pub scope: String,
    /// Seconds until the token expires. Online tokens only.
    pub expires_in: Option<i64>,
    /// Scopes available to the associated user. Online tokens only.
    pub associated_user_scope: Option<String>,
    /// The user the token is tied to. Online tokens only.
    pub associated_user: Option<AssociatedUser>,
}

/// Trades an authorization code for a permanent offline access token.
///
/// Call this from the OAuth callback handler after
/// [`verify_callback_params`](crate::auth::oauth::verify_callback_params)
/// has accepted the query parameters, passing the `code` parameter.
///
/// # Errors
///
/// Returns [`OAuthError::TokenExchangeFailed`] if the shop rejects the code
/// or the response body cannot be parsed, or [`OAuthError::Http`] for
/// network failures.
///
/// # Example
///
/// ```rust,ignore
/// let token = get_access_token(&config, &shop, &code).await?;
/// println!("Granted scopes: {}", token.scope);
/// ```
pub async fn get_access_token(
    config: &AppConfig,
    shop: &ShopDomain,
    code: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    let client = HttpClient::new("", shop, "", Some(config));
    get_access_token_with(&client, config, code).await
}

/// Trades an authorization code for a token using a prepared client.
///
/// The client must route to the shop root (an empty base path).
///
/// # Errors
///
/// Same as [`get_access_token`].
pub async fn get_access_token_with(
    client: &HttpClient,
    config: &AppConfig,
    code: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    let body = json!({
        "client_id": config.api_key().as_ref(),
        "client_secret": config.api_secret_key().as_ref(),
        "code": code,
    });

    request_token(client, body).await
}

/// Exchanges a session ID token for an offline access token.
///
/// # Errors
///
/// Returns [`OAuthError::TokenExchangeFailed`] if the shop rejects the ID
/// token or the response body cannot be parsed, or [`OAuthError::Http`]
/// for network failures.
pub async fn exchange_offline_token(
    config: &AppConfig,
    shop: &ShopDomain,
    id_token: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    let client = HttpClient::new("", shop, "", Some(config));
    exchange_token_with(&client, config, id_token, RequestedTokenType::OfflineAccessToken).await
}

/// Exchanges a session ID token for an online access token.
///
/// The response carries the associated user and an expiry.
///
/// # Errors
///
/// Same as [`exchange_offline_token`].
pub async fn exchange_online_token(
    config: &AppConfig,
    shop: &ShopDomain,
    id_token: &str,
) -> Result<AccessTokenResponse, OAuthError> {
    let client = HttpClient::new("", shop, "", Some(config));
    exchange_token_with(&client, config, id_token, RequestedTokenType::OnlineAccessToken).await
}

/// Exchanges a session ID token for a token using a prepared client.
///
/// The client must route to the shop root (an empty base path).
///
/// # Errors
///
/// Same as [`exchange_offline_token`].
pub async fn exchange_token_with(
    client: &HttpClient,
    config: &AppConfig,
    id_token: &str,
    requested_token_type: RequestedTokenType,
) -> Result<AccessTokenResponse, OAuthError> {
    let body = json!({
        "client_id": config.api_key().as_ref(),
        "client_secret": config.api_secret_key().as_ref(),
        "grant_type": TOKEN_EXCHANGE_GRANT_TYPE,
        "subject_token": id_token,
        "subject_token_type": ID_TOKEN_TYPE,
        "requested_token_type": requested_token_type.as_urn(),
    });

    request_token(client, body).await
}

/// Revokes the app's API permissions for a shop, uninstalling it.
///
/// # Errors
///
/// Returns [`OAuthError::UninstallFailed`] if the shop responds with a
/// non-2xx status, or [`OAuthError::Http`] for network failures.
pub async fn uninstall(
    config: &AppConfig,
    shop: &ShopDomain,
    access_token: &str,
) -> Result<(), OAuthError> {
    let client = HttpClient::new("", shop, access_token, Some(config));
    uninstall_with(&client).await
}

/// Revokes the app's API permissions using a prepared client.
///
/// The client must route to the shop root and carry the access token.
///
/// # Errors
///
/// Same as [`uninstall`].
pub async fn uninstall_with(client: &HttpClient) -> Result<(), OAuthError> {
    let request = HttpRequest::builder(HttpMethod::Delete, UNINSTALL_PATH)
        .build()
        .map_err(HttpError::from)?;

    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(OAuthError::UninstallFailed {
            status: response.code,
            message: response.body.to_string(),
        });
    }

    Ok(())
}

/// Posts a token request body to the access token endpoint and parses the
/// response.
async fn request_token(
    client: &HttpClient,
    body: serde_json::Value,
) -> Result<AccessTokenResponse, OAuthError> {
    let request = HttpRequest::builder(HttpMethod::Post, ACCESS_TOKEN_PATH)
        .body(body)
        .body_type(DataType::Json)
        .build()
        .map_err(HttpError::from)?;

    let response = client.request(request).await?;

    if !response.is_ok() {
        return Err(OAuthError::TokenExchangeFailed {
            status: response.code,
            message: response.body.to_string(),
        });
    }

    let status = response.code;
    serde_json::from_value(response.body).map_err(|e| OAuthError::TokenExchangeFailed {
        status,
        message: format!("Failed to parse token response: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, ApiSecretKey};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_config() -> AppConfig {
        AppConfig::builder()
            .api_key(ApiKey::new("test-api-key").unwrap())
            .api_secret_key(ApiSecretKey::new("test-secret").unwrap())
            .build()
            .unwrap()
    }

    fn online_token_body() -> serde_json::Value {
        json!({
            "access_token": "online-token",
            "scope": "read_orders",
            "expires_in": 86399,
            "associated_user_scope": "read_orders",
            "associated_user": {
                "id": 902_541_635_u64,
                "first_name": "John",
                "last_name": "Smith",
                "email": "john@example.com",
                "email_verified": true,
                "account_owner": true,
                "locale": "en",
                "collaborator": false
            }
        })
    }

    #[test]
    fn test_access_token_path_constant() {
        assert_eq!(ACCESS_TOKEN_PATH, "admin/oauth/access_token");
    }

    #[test]
    fn test_requested_token_type_urns() {
        assert_eq!(
            RequestedTokenType::OnlineAccessToken.as_urn(),
            "urn:shopify:params:oauth:token-type:online-access-token"
        );
        assert_eq!(
            RequestedTokenType::OfflineAccessToken.as_urn(),
            "urn:shopify:params:oauth:token-type:offline-access-token"
        );
    }

    #[tokio::test]
    async fn test_get_access_token_with_posts_credentials() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token"))
            .and(body_partial_json(json!({
                "client_id": "test-api-key",
                "client_secret": "test-secret",
                "code": "auth-code-123",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "shpat_abc123",
                "scope": "read_orders,write_products",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "", None);
        let config = create_test_config();

        let token = get_access_token_with(&client, &config, "auth-code-123")
            .await
            .unwrap();

        assert_eq!(token.access_token, "shpat_abc123");
        assert_eq!(token.scope, "read_orders,write_products");
        assert!(token.expires_in.is_none());
        assert!(token.associated_user.is_none());
    }

    #[tokio::test]
    async fn test_exchange_token_with_sends_offline_urn() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token"))
            .and(body_partial_json(json!({
                "grant_type": "urn:ietf:params:oauth:grant-type:token-exchange",
                "subject_token": "session-id-token",
                "subject_token_type": "urn:ietf:params:oauth:token-type:id_token",
                "requested_token_type": "urn:shopify:params:oauth:token-type:offline-access-token",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "offline-token",
                "scope": "read_orders",
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "", None);
        let config = create_test_config();

        let token = exchange_token_with(
            &client,
            &config,
            "session-id-token",
            RequestedTokenType::OfflineAccessToken,
        )
        .await
        .unwrap();

        assert_eq!(token.access_token, "offline-token");
        assert!(token.associated_user.is_none());
    }

    #[tokio::test]
    async fn test_exchange_token_with_parses_associated_user() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token"))
            .and(body_partial_json(json!({
                "requested_token_type": "urn:shopify:params:oauth:token-type:online-access-token",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(online_token_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "", None);
        let config = create_test_config();

        let token = exchange_token_with(
            &client,
            &config,
            "session-id-token",
            RequestedTokenType::OnlineAccessToken,
        )
        .await
        .unwrap();

        assert_eq!(token.access_token, "online-token");
        assert_eq!(token.expires_in, Some(86399));
        assert_eq!(token.associated_user_scope.as_deref(), Some("read_orders"));

        let user = token.associated_user.unwrap();
        assert_eq!(user.id, 902_541_635);
        assert_eq!(user.email, "john@example.com");
        assert!(user.account_owner);
    }

    #[tokio::test]
    async fn test_token_request_failure_carries_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": "invalid_request"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "", None);
        let config = create_test_config();

        let err = get_access_token_with(&client, &config, "bad-code")
            .await
            .unwrap_err();

        match err {
            OAuthError::TokenExchangeFailed { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid_request"));
            }
            other => panic!("Expected TokenExchangeFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_token_parse_failure_maps_to_token_exchange_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/admin/oauth/access_token"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"unexpected": "shape"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "", None);
        let config = create_test_config();

        let err = get_access_token_with(&client, &config, "auth-code")
            .await
            .unwrap_err();

        match err {
            OAuthError::TokenExchangeFailed { status, message } => {
                assert_eq!(status, 200);
                assert!(message.contains("Failed to parse token response"));
            }
            other => panic!("Expected TokenExchangeFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_uninstall_with_deletes_api_permissions() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/admin/api_permissions/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "access-token", None);

        assert!(uninstall_with(&client).await.is_ok());
    }

    #[tokio::test]
    async fn test_uninstall_failure_carries_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/admin/api_permissions/current.json"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"errors": "Unauthorized"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpClient::with_base_uri(mock_server.uri(), "", "bad-token", None);

        let err = uninstall_with(&client).await.unwrap_err();

        match err {
            OAuthError::UninstallFailed { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("Unauthorized"));
            }
            other => panic!("Expected UninstallFailed, got {other:?}"),
        }
    }
}
