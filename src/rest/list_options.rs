//! Shared list query options for REST resources.
//!
//! This module provides the [`ListOptions`] struct holding the filter and
//! pagination parameters common to resource list and count endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Common query options shared by resource list and count endpoints.
///
/// Embed by value with `#[serde(flatten)]` inside resource-specific
/// parameter structs so shared filters and resource filters serialize
/// into a single flat query string.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::ListOptions;
///
/// let options = ListOptions {
///     limit: Some(50),
///     since_id: Some(123),
///     ..ListOptions::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    /// Cursor token from a previous response's `Link` header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,

    /// Maximum number of results per page (the API caps this at 250).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Restrict results to those after the specified ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    /// Show resources created at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    /// Show resources created at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    /// Show resources last updated at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    /// Show resources last updated at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}
