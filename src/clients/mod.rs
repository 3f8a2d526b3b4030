//! HTTP client types for Shopify API communication.
//!
//! This module provides the foundational HTTP client layer for making
//! authenticated requests to the Shopify API. It handles request/response
//! processing and Shopify-specific header parsing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`PaginationInfo`]: Cursor tokens parsed from the `Link` header
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::clients::{HttpClient, HttpRequest, HttpMethod, DataType};
//! use shopify_rest::config::ShopDomain;
//!
//! // Create an HTTP client
//! let shop = ShopDomain::new("my-store").unwrap();
//! let client = HttpClient::new("/admin/api/2025-10", &shop, "access-token", None);
//!
//! // Build and send a request
//! let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Response Handling
//!
//! Each request is sent exactly once. Every received HTTP response is
//! returned as `Ok`, whatever its status code; only request validation and
//! network failures produce errors. Callers inspect [`HttpResponse::is_ok`]
//! and interpret error bodies themselves.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{
    ApiCallLimit, ApiDeprecationInfo, HttpResponse, PaginationError, PaginationInfo,
};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
