//! # Shopify REST API client
//!
//! A typed Rust client for the Shopify REST Admin API: validated
//! configuration, OAuth flows, webhook verification, and typed resources
//! over an async HTTP client.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`AppConfig`] and validated newtypes
//! - OAuth authorization code grant and token exchange via [`auth::oauth`]
//! - Webhook signature verification via [`webhooks`]
//! - Typed REST resources (orders, charges, currencies) via
//!   [`rest::resources`], tolerant of the payload irregularities the live
//!   API produces
//! - Cursor pagination parsed strictly from `Link` headers
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_rest::{ApiKey, ApiSecretKey, ApiVersion, AppConfig};
//!
//! let config = AppConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-api-secret").unwrap())
//!     .scopes("read_products,write_orders".parse().unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth
//!
//! ```rust,ignore
//! use shopify_rest::auth::oauth::{authorize_url, get_access_token, verify_callback_params, StateParam};
//! use shopify_rest::ShopDomain;
//!
//! // Step 1: redirect the merchant to the authorization URL
//! let shop = ShopDomain::new("example-shop")?;
//! let state = StateParam::new();
//! let url = authorize_url(&config, &shop, &state)?;
//! // Store state in the session, redirect to url
//!
//! // Step 2: verify the callback and trade the code for a token
//! if !verify_callback_params(&config, &query_pairs) {
//!     return Err("invalid callback signature".into());
//! }
//! let token = get_access_token(&config, &shop, &code).await?;
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use shopify_rest::clients::RestClient;
//! use shopify_rest::rest::resources::Order;
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::ShopDomain;
//!
//! let shop = ShopDomain::new("example-shop")?;
//! let client = RestClient::new(&shop, &token.access_token, Some(&config));
//!
//! let orders = Order::all(&client, None).await?;
//! for order in orders.iter() {
//!     println!("{:?}: {:?}", order.id, order.name);
//! }
//! if orders.has_next_page() {
//!     // Pass orders.next_page_info() back via ListOptions::page_info
//! }
//! ```
//!
//! ## Verifying Webhooks
//!
//! ```rust,ignore
//! use shopify_rest::webhooks::{verify_webhook, WebhookRequest};
//!
//! let request = WebhookRequest::new(body_bytes, hmac_header, topic, shop, None, None);
//! if !verify_webhook(&config, &request) {
//!     return Response::unauthorized();
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No silent retries**: Each request is sent exactly once; callers decide
//!   how to treat non-2xx responses

pub mod auth;
pub mod bigcommerce;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod webhooks;

// Re-export public types at crate root for convenience
pub use auth::{AssociatedUser, AuthScopes};
pub use config::{
    ApiKey, ApiSecretKey, ApiVersion, AppConfig, AppConfigBuilder, HostUrl, ShopDomain,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, PaginationError, PaginationInfo,
    RestClient, RestError,
};

// Re-export OAuth types for convenience
pub use auth::oauth::{
    authorize_url, exchange_offline_token, exchange_online_token, get_access_token, uninstall,
    verify_callback_params, verify_message, AccessTokenResponse, OAuthError, RequestedTokenType,
    StateParam,
};
