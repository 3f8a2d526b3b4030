//! HTTP response types.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

use thiserror::Error;

/// Information about a deprecated API endpoint or feature.
///
/// When Shopify deprecates an API endpoint, they include the
/// `X-Shopify-API-Deprecated-Reason` header in responses. This struct
/// provides structured access to that deprecation information.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiDeprecationInfo;
///
/// let info = ApiDeprecationInfo {
///     reason: "This endpoint will be removed in 2025-07".to_string(),
///     path: Some("/admin/api/2025-10/orders.json".to_string()),
/// };
///
/// println!("Deprecation: {} at {:?}", info.reason, info.path);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiDeprecationInfo {
    /// The reason for deprecation from the `X-Shopify-API-Deprecated-Reason` header.
    pub reason: String,
    /// The request path that triggered the deprecation notice, if available.
    pub path: Option<String>,
}

/// Rate limit information parsed from the `X-Shopify-Shop-Api-Call-Limit` header.
///
/// The header format is "X/Y" where X is the current request count and Y is
/// the bucket size.
///
/// # Example
///
/// ```rust
/// use shopify_rest::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.bucket_size, 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// The current number of requests made in this bucket.
    pub request_count: u32,
    /// The maximum number of requests allowed in this bucket.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses the rate limit header value.
    ///
    /// # Arguments
    ///
    /// * `header_value` - The header value in "X/Y" format
    ///
    /// # Returns
    ///
    /// `Some(ApiCallLimit)` if parsing succeeds, `None` otherwise.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let parts: Vec<&str> = header_value.split('/').collect();
        if parts.len() != 2 {
            return None;
        }

        let request_count = parts[0].parse().ok()?;
        let bucket_size = parts[1].parse().ok()?;

        Some(Self {
            request_count,
            bucket_size,
        })
    }
}

/// Errors encountered while parsing the `Link` pagination header.
///
/// Each variant carries the offending header fragment so callers can see
/// exactly what the API returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// A Link header entry did not wrap its URL in angle brackets.
    #[error("Link header entry missing '<' and '>' URL delimiters: {entry}")]
    MissingDelimiters {
        /// The offending header entry.
        entry: String,
    },

    /// A Link header entry carried no `rel` attribute.
    #[error("Link header entry missing rel attribute: {entry}")]
    MissingRelAttribute {
        /// The offending header entry.
        entry: String,
    },

    /// A next or previous page URL carried no `page_info` parameter.
    #[error("Link header URL missing page_info parameter: {url}")]
    MissingPageToken {
        /// The offending URL.
        url: String,
    },
}

/// Pagination cursors parsed from the `Link` header.
///
/// Shopify uses cursor-based pagination. Each paginated response carries a
/// `Link` header whose `next` and `previous` relations embed a `page_info`
/// token in their URLs. Pass the token back via the `page_info` query
/// parameter to fetch the corresponding page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// The `page_info` token for the previous page, if available.
    pub prev_page_info: Option<String>,
    /// The `page_info` token for the next page, if available.
    pub next_page_info: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination cursors from a `Link` header value.
    ///
    /// The header format is:
    /// `<url>; rel="next", <url>; rel="previous"`
    ///
    /// An empty or whitespace-only header yields an empty `PaginationInfo`.
    /// Entries with relations other than `next` and `previous` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] if an entry lacks angle-bracket URL
    /// delimiters, lacks a `rel` attribute, or a next/previous URL carries
    /// no `page_info` parameter.
    pub fn from_link_header(header_value: &str) -> Result<Self, PaginationError> {
        let mut result = Self::default();

        let header_value = header_value.trim();
        if header_value.is_empty() {
            return Ok(result);
        }

        for entry in header_value.split(',') {
            let entry = entry.trim();
            let mut parts = entry.split(';');

            // First part must be the angle-bracket delimited URL
            let url = parts
                .next()
                .map(str::trim)
                .and_then(|part| part.strip_prefix('<'))
                .and_then(|part| part.strip_suffix('>'))
                .ok_or_else(|| PaginationError::MissingDelimiters {
                    entry: entry.to_string(),
                })?;

            let rel = parts
                .find_map(|part| part.trim().strip_prefix("rel="))
                .map(|rel| rel.trim_matches('"'))
                .ok_or_else(|| PaginationError::MissingRelAttribute {
                    entry: entry.to_string(),
                })?;

            if rel == "next" || rel == "previous" {
                let page_info = Self::extract_page_info(url).ok_or_else(|| {
                    PaginationError::MissingPageToken {
                        url: url.to_string(),
                    }
                })?;

                if rel == "next" {
                    result.next_page_info = Some(page_info);
                } else {
                    result.prev_page_info = Some(page_info);
                }
            }
        }

        Ok(result)
    }

    /// Extracts the `page_info` parameter from a URL.
    fn extract_page_info(url: &str) -> Option<String> {
        let (_, query) = url.split_once('?')?;

        query.split('&').find_map(|param| {
            let (key, value) = param.split_once('=')?;
            (key == "page_info").then(|| value.to_string())
        })
    }
}

/// An HTTP response from the Shopify API.
///
/// Contains the response status code, headers, and parsed body. Header
/// names are lowercased. Shopify-specific header values such as rate
/// limits and pagination cursors are parsed on demand through accessor
/// methods, so callers that never page through results are unaffected by
/// a malformed `Link` header.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers with lowercased names (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns rate limit information from the `X-Shopify-Shop-Api-Call-Limit`
    /// header, if present and well-formed.
    #[must_use]
    pub fn api_call_limit(&self) -> Option<ApiCallLimit> {
        self.headers
            .get("x-shopify-shop-api-call-limit")
            .and_then(|values| values.first())
            .and_then(|value| ApiCallLimit::parse(value))
    }

    /// Returns the raw `Link` header value, if present.
    #[must_use]
    pub fn link_header(&self) -> Option<&str> {
        self.headers
            .get("link")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses pagination cursors from the `Link` header.
    ///
    /// Responses without a `Link` header yield an empty [`PaginationInfo`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::HttpResponse;
    /// use std::collections::HashMap;
    /// use serde_json::json;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert(
    ///     "link".to_string(),
    ///     vec![r#"<https://shop.myshopify.com/admin/api/2025-10/orders.json?page_info=abc>; rel="next""#.to_string()],
    /// );
    ///
    /// let response = HttpResponse::new(200, headers, json!({}));
    /// let pagination = response.pagination().unwrap();
    /// assert_eq!(pagination.next_page_info.as_deref(), Some("abc"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError`] if the header is present but malformed.
    pub fn pagination(&self) -> Result<PaginationInfo, PaginationError> {
        self.link_header().map_or_else(
            || Ok(PaginationInfo::default()),
            PaginationInfo::from_link_header,
        )
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    ///
    /// When present, this indicates the API endpoint is deprecated and
    /// should be updated.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.headers
            .get("x-shopify-api-deprecated-reason")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns structured deprecation information if the response indicates deprecation.
    ///
    /// This method parses the `X-Shopify-API-Deprecated-Reason` header and returns
    /// an [`ApiDeprecationInfo`] struct with the deprecation details.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::clients::HttpResponse;
    /// use std::collections::HashMap;
    /// use serde_json::json;
    ///
    /// let mut headers = HashMap::new();
    /// headers.insert(
    ///     "x-shopify-api-deprecated-reason".to_string(),
    ///     vec!["This endpoint is deprecated".to_string()],
    /// );
    ///
    /// let response = HttpResponse::new(200, headers, json!({}));
    ///
    /// if let Some(info) = response.deprecation_info() {
    ///     println!("Warning: {}", info.reason);
    /// }
    /// ```
    #[must_use]
    pub fn deprecation_info(&self) -> Option<ApiDeprecationInfo> {
        self.deprecation_reason().map(|reason| ApiDeprecationInfo {
            reason: reason.to_string(),
            path: None, // Path is set by the caller who knows the request path
        })
    }

    /// Returns `true` if the response indicates a deprecated API endpoint.
    ///
    /// This checks for the presence of the `X-Shopify-API-Deprecated-Reason` header.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason().is_some()
    }
}
