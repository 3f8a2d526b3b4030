//! REST client implementation for the Shopify Admin API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! to the Shopify Admin API with automatic path normalization.

use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, AppConfig, ShopDomain};

/// REST API client for the Shopify Admin API.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests with automatic path normalization. Every received HTTP
/// response is returned as `Ok`; callers inspect [`HttpResponse::is_ok`] to
/// decide how to treat non-2xx codes.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::rest::RestClient;
/// use shopify_rest::config::ShopDomain;
///
/// let shop = ShopDomain::new("my-store").unwrap();
/// let client = RestClient::new(&shop, "access-token", None);
///
/// // GET request
/// let response = client.get("orders", None).await?;
///
/// // POST request with body
/// let body = serde_json::json!({"order": {"email": "customer@example.com"}});
/// let response = client.post("orders", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the given shop.
    ///
    /// This constructor uses the API version from the configuration, or
    /// falls back to the latest stable version if not specified.
    ///
    /// # Arguments
    ///
    /// * `shop` - The shop domain requests are sent to
    /// * `access_token` - The API access token
    /// * `config` - Optional configuration for API version and other settings
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::rest::RestClient;
    /// use shopify_rest::config::ShopDomain;
    ///
    /// let shop = ShopDomain::new("my-store").unwrap();
    /// let client = RestClient::new(&shop, "access-token", None);
    /// ```
    #[must_use]
    pub fn new(shop: &ShopDomain, access_token: &str, config: Option<&AppConfig>) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());

        Self::create_client(shop, access_token, config, api_version)
    }

    /// Creates a new REST client with a specific API version override.
    ///
    /// This constructor allows overriding the API version from configuration.
    ///
    /// # Arguments
    ///
    /// * `shop` - The shop domain requests are sent to
    /// * `access_token` - The API access token
    /// * `config` - Optional configuration for other settings
    /// * `version` - The API version to use for requests
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::rest::RestClient;
    /// use shopify_rest::config::{ApiVersion, ShopDomain};
    ///
    /// let shop = ShopDomain::new("my-store").unwrap();
    /// let client = RestClient::with_version(&shop, "access-token", None, ApiVersion::V2025_04);
    /// ```
    #[must_use]
    pub fn with_version(
        shop: &ShopDomain,
        access_token: &str,
        config: Option<&AppConfig>,
        version: ApiVersion,
    ) -> Self {
        let config_version = config.map(|c| c.api_version().clone());

        // Log debug message when overriding version
        if let Some(ref cfg_version) = config_version {
            if &version == cfg_version {
                tracing::debug!(
                    "Rest client has a redundant API version override to the default {}",
                    cfg_version
                );
            } else {
                tracing::debug!(
                    "Rest client overriding default API version {} with {}",
                    cfg_version,
                    version
                );
            }
        }

        Self::create_client(shop, access_token, config, version)
    }

    /// Creates a REST client that sends requests to an explicit base URI
    /// instead of deriving one from a shop domain.
    ///
    /// Useful when routing traffic through a local proxy or a development
    /// server standing in for the live API. The API version comes from the
    /// configuration, falling back to the latest stable version.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::rest::RestClient;
    ///
    /// let client = RestClient::with_base_uri("http://localhost:3000", "access-token", None);
    /// ```
    #[must_use]
    pub fn with_base_uri(
        base_uri: impl Into<String>,
        access_token: &str,
        config: Option<&AppConfig>,
    ) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        let base_path = format!("/admin/api/{api_version}");
        let http_client = HttpClient::with_base_uri(base_uri, base_path, access_token, config);

        Self {
            http_client,
            api_version,
        }
    }

    /// Internal helper to create the client with shared logic.
    fn create_client(
        shop: &ShopDomain,
        access_token: &str,
        config: Option<&AppConfig>,
        api_version: ApiVersion,
    ) -> Self {
        tracing::debug!(
            "Creating REST client for {} with API version {}",
            shop.as_ref(),
            api_version
        );

        // Construct base path: /admin/api/{version}
        let base_path = format!("/admin/api/{api_version}");

        // Create internal HTTP client
        let http_client = HttpClient::new(base_path, shop, access_token, config);

        Self {
            http_client,
            api_version,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "orders", "orders/123")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for request validation and network errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Simple GET
    /// let response = client.get("orders", None).await?;
    ///
    /// // GET with query parameters
    /// let mut query = HashMap::new();
    /// query.insert("limit".to_string(), "50".to_string());
    /// let response = client.get("orders", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "orders")
    /// * `body` - The JSON body to send
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for request validation and network errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({
    ///     "order": {
    ///         "email": "customer@example.com"
    ///     }
    /// });
    /// let response = client.post("orders", body, None).await?;
    /// ```
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "orders/123")
    /// * `body` - The JSON body to send
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for request validation and network errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let body = serde_json::json!({
    ///     "order": {
    ///         "note": "Updated note"
    ///     }
    /// });
    /// let response = client.put("orders/123", body, None).await?;
    /// ```
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - The REST API path (e.g., "orders/123")
    /// * `query` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for request validation and network errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.delete("orders/123", None).await?;
    /// ```
    pub async fn delete(
        &self,
        path: &str,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<HashMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        // Normalize the path
        let normalized_path = normalize_path(path)?;

        // Build the request
        let mut builder = HttpRequest::builder(method, &normalized_path);

        // Add body if present
        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        // Add query parameters if present
        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        // Build and send the request
        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path.
///
/// This function:
/// 1. Strips leading `/` characters
/// 2. Strips trailing `.json` suffix
/// 3. Appends `.json` suffix
/// 4. Returns an error for empty paths
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("orders")?, "orders.json");
/// assert_eq!(normalize_path("/orders")?, "orders.json");
/// assert_eq!(normalize_path("orders.json")?, "orders.json");
/// assert_eq!(normalize_path("/orders.json")?, "orders.json");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    // Strip leading slashes
    let path = path.trim_start_matches('/');

    // Strip trailing .json
    let path = path.strip_suffix(".json").unwrap_or(path);

    // Check for empty path
    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    // Append .json suffix
    Ok(format!("{path}.json"))
}
