//! HTTP client for Shopify API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests to the Shopify API.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{AppConfig, ShopDomain};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Shopify API.
///
/// The client handles:
/// - Base URI construction from the shop domain
/// - Default headers including User-Agent and access token
/// - Response header and body parsing
///
/// Each request is sent exactly once. Every received HTTP response is
/// returned as `Ok`, whatever its status code; callers inspect
/// [`HttpResponse::is_ok`] to decide how to treat non-2xx codes.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::clients::{HttpClient, HttpRequest, HttpMethod};
/// use shopify_rest::config::ShopDomain;
///
/// let shop = ShopDomain::new("my-store").unwrap();
/// let client = HttpClient::new("/admin/api/2025-10", &shop, "access-token", None);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    /// Base path (e.g., "/admin/api/2025-10").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given shop.
    ///
    /// # Arguments
    ///
    /// * `base_path` - The base path for API requests (e.g., "/admin/api/2025-10").
    ///   An empty base path routes requests to the shop root, which the OAuth
    ///   endpoints use.
    /// * `shop` - The shop domain requests are sent to
    /// * `access_token` - The API access token; an empty token sends no
    ///   `X-Shopify-Access-Token` header
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::HttpClient;
    /// use shopify_rest::config::ShopDomain;
    ///
    /// let shop = ShopDomain::new("my-store").unwrap();
    /// let client = HttpClient::new("/admin/api/2025-10", &shop, "access-token", None);
    /// ```
    #[must_use]
    pub fn new(
        base_path: impl Into<String>,
        shop: &ShopDomain,
        access_token: &str,
        config: Option<&AppConfig>,
    ) -> Self {
        Self::with_base_uri(
            format!("https://{}", shop.as_ref()),
            base_path,
            access_token,
            config,
        )
    }

    /// Creates a client that sends requests to an explicit base URI instead
    /// of deriving one from a shop domain.
    ///
    /// Useful when routing traffic through a local proxy or a development
    /// server standing in for the live API.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::HttpClient;
    ///
    /// let client = HttpClient::with_base_uri("http://localhost:3000", "", "token", None);
    /// assert_eq!(client.base_uri(), "http://localhost:3000");
    /// ```
    #[must_use]
    pub fn with_base_uri(
        base_uri: impl Into<String>,
        base_path: impl Into<String>,
        access_token: &str,
        config: Option<&AppConfig>,
    ) -> Self {
        let base_uri = base_uri.into();
        let base_path = base_path.into();

        // Build User-Agent header
        let user_agent_prefix = config
            .and_then(AppConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify API Library v{SDK_VERSION} | Rust {rust_version}");

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Add access token header if present
        if !access_token.is_empty() {
            default_headers.insert(
                "X-Shopify-Access-Token".to_string(),
                access_token.to_string(),
            );
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Shopify API.
    ///
    /// This method handles:
    /// - Request validation
    /// - URL construction
    /// - Header merging
    /// - Response parsing
    /// - Deprecation warning logging
    ///
    /// The request is sent exactly once. Any received HTTP response is
    /// returned as `Ok`, including 4xx and 5xx statuses.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
    ///     .build()
    ///     .unwrap();
    ///
    /// let response = client.request(request).await?;
    /// if response.is_ok() {
    ///     println!("Orders: {}", response.body);
    /// }
    /// ```
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request first
        request.verify()?;

        // Build full URL
        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            crate::clients::http_request::HttpMethod::Get => self.client.get(&url),
            crate::clients::http_request::HttpMethod::Post => self.client.post(&url),
            crate::clients::http_request::HttpMethod::Put => self.client.put(&url),
            crate::clients::http_request::HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query params
        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Parse body as JSON
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, return raw body as string value
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        // Log deprecation warning if present
        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                "Deprecated request to Shopify API at {}, received reason: {}",
                request.path,
                reason
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
