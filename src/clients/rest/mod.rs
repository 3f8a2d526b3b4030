//! REST API client for the Shopify Admin API.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that offers convenient methods
//! for interacting with Shopify's REST Admin API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`RestClient`]: The REST API client with `get()`, `post()`, `put()`, `delete()` methods
//! - [`RestError`]: Error type for REST API operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::rest::RestClient;
//! use shopify_rest::config::{AppConfig, ApiKey, ApiSecretKey, ShopDomain};
//!
//! // Create configuration
//! let config = AppConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! // Create REST client
//! let shop = ShopDomain::new("my-store").unwrap();
//! let client = RestClient::new(&shop, "access-token", Some(&config));
//!
//! // Make requests
//! let response = client.get("orders", None).await?;
//! println!("Orders: {}", response.body);
//! ```
//!
//! # Path Normalization
//!
//! The client normalizes paths before sending requests:
//!
//! - Leading slashes are stripped: `/orders` -> `orders`
//! - Trailing `.json` is stripped and re-added: `orders.json` -> `orders.json`
//! - Empty paths after normalization are rejected

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
