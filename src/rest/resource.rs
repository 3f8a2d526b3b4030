//! REST Resource trait for CRUD operations.
//!
//! This module defines the [`RestResource`] trait, which provides a standardized
//! interface for interacting with Shopify REST API resources. Resources that
//! implement this trait gain `find()`, `all()`, `save()`, `delete()`, and
//! `count()` methods.
//!
//! # Implementing a Resource
//!
//! To implement a REST resource:
//!
//! 1. Define a struct with serde derives
//! 2. Implement the `RestResource` trait with associated types and constants
//! 3. The trait provides default implementations for CRUD operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{RestResource, ResourcePath, ResourceOperation, ResourceResponse, ResourceError};
//! use shopify_rest::clients::{HttpMethod, RestClient};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Order {
//!     pub id: Option<u64>,
//!     pub name: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub email: Option<String>,
//! }
//!
//! impl RestResource for Order {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = OrderAllParams;
//!     type CountParams = ();
//!
//!     const NAME: &'static str = "Order";
//!     const PLURAL: &'static str = "orders";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "orders/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Count, &[], "orders/count"),
//!         ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "orders"),
//!         ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "orders/{id}"),
//!         ResourcePath::new(HttpMethod::Delete, ResourceOperation::Delete, &["id"], "orders/{id}"),
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//!
//! // Usage:
//! let order = Order::find(&client, 123, None).await?;
//! let orders = Order::all(&client, None).await?;
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::{
    build_path, get_path, ResourceError, ResourceOperation, ResourcePath, ResourceResponse,
};

/// A REST resource that can be fetched, created, updated, and deleted.
///
/// This trait provides a standardized interface for CRUD operations on
/// Shopify REST API resources. Implementors define the resource's paths,
/// name, and parameter types, and get default implementations for all
/// CRUD methods.
///
/// # Associated Types
///
/// - `Id`: The type of the resource's identifier (usually `u64` or `String`)
/// - `FindParams`: Parameters for `find()` operations (use `()` if none)
/// - `AllParams`: Parameters for `all()` operations (pagination, filters, etc.)
/// - `CountParams`: Parameters for `count()` operations
///
/// # Associated Constants
///
/// - `NAME`: The singular resource name (e.g., "Order")
/// - `PLURAL`: The plural form used in URLs (e.g., "orders")
/// - `PATHS`: Available paths for different operations
/// - `PREFIX`: Optional path prefix for nested resources
///
/// # Required Bounds
///
/// Resources must be serializable, deserializable, cloneable, and thread-safe.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// The type of the resource's identifier.
    type Id: Display + Clone + Send + Sync;

    /// Parameters for `find()` operations.
    ///
    /// Use `()` if no parameters are needed.
    type FindParams: Serialize + Default + Send + Sync;

    /// Parameters for `all()` operations (filtering, pagination, etc.).
    ///
    /// Use `()` if no parameters are needed.
    type AllParams: Serialize + Default + Send + Sync;

    /// Parameters for `count()` operations.
    ///
    /// Use `()` if no parameters are needed.
    type CountParams: Serialize + Default + Send + Sync;

    /// The singular name of the resource (e.g., "Order").
    ///
    /// Used in error messages and as the response body key for single resources.
    const NAME: &'static str;

    /// The plural name used in URL paths (e.g., "orders").
    ///
    /// Used as the response body key for collection operations.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    ///
    /// Define paths for each operation the resource supports. The path
    /// selection logic will choose the most specific path that matches
    /// the available IDs.
    const PATHS: &'static [ResourcePath];

    /// Optional path prefix for nested resources.
    ///
    /// Override this for resources that always appear under a parent path.
    const PREFIX: Option<&'static str> = None;

    /// Returns the resource's ID if it exists.
    ///
    /// Returns `None` for new resources that haven't been saved yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Returns the lowercase key used in JSON request/response bodies.
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }

    /// Finds a single resource by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `id` - The resource ID to find
    /// * `params` - Optional parameters for the request
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let order = Order::find(&client, 123, None).await?;
    /// println!("Found: {:?}", order.name);
    /// ```
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        // Build the path
        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Find, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: "find",
            },
        )?;

        let url = build_path(path.template, &ids);
        let full_path = Self::build_full_path(&url);

        // Build query params from FindParams
        let query = params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        // Make the request
        let response = client.get(&full_path, query).await?;

        // Check for error status codes
        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        // Parse the response
        let key = Self::resource_key();
        ResourceResponse::from_http_response(response, &key)
    }

    /// Lists all resources matching the given parameters.
    ///
    /// Returns a paginated response. Use `has_next_page()` and `next_page_info()`
    /// to navigate through pages.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use for the request
    /// * `params` - Optional parameters for filtering/pagination
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no valid path matches.
    /// Returns [`ResourceError::Pagination`] if the response's `Link` header
    /// is malformed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = Order::all(&client, None).await?;
    /// for order in response.iter() {
    ///     println!("Order: {:?}", order.name);
    /// }
    ///
    /// if response.has_next_page() {
    ///     // Fetch next page...
    /// }
    /// ```
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::All, &[]).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: "all",
            },
        )?;

        let url = path.template;
        let full_path = Self::build_full_path(url);

        // Build query params from AllParams
        let query = params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        // Make the request
        let response = client.get(&full_path, query).await?;

        // Check for error status codes
        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        // Parse the response
        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// Saves the resource (create or update).
    ///
    /// For new resources (no ID), sends a POST request to create.
    /// For existing resources (has ID), sends a PUT request to update.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    ///
    /// # Returns
    ///
    /// The saved resource with any server-generated fields populated.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if validation fails (422).
    /// Returns [`ResourceError::NotFound`] if updating a non-existent resource.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// // Create new
    /// let order = Order { id: None, email: Some("a@b.co".to_string()), ..Default::default() };
    /// let saved = order.save(&client).await?;
    ///
    /// // Update existing
    /// let mut order = Order::find(&client, 123, None).await?.into_inner();
    /// order.tags = Some("vip".to_string());
    /// let saved = order.save(&client).await?;
    /// ```
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let is_new = self.get_id().is_none();
        let key = Self::resource_key();

        // Wrap the resource in its key
        let mut body_map = serde_json::Map::new();
        body_map.insert(key.clone(), serialize_resource(self)?);
        let body = Value::Object(body_map);

        if is_new {
            // Create (POST)
            let path = get_path(Self::PATHS, ResourceOperation::Create, &[]).ok_or(
                ResourceError::PathResolutionFailed {
                    resource: Self::NAME,
                    operation: "create",
                },
            )?;

            let url = path.template;
            let full_path = Self::build_full_path(url);

            let response = client.post(&full_path, body, None).await?;

            if !response.is_ok() {
                return Err(ResourceError::from_http_response(
                    response.code,
                    &response.body,
                    Self::NAME,
                    None,
                    response.request_id(),
                ));
            }

            let result: ResourceResponse<Self> =
                ResourceResponse::from_http_response(response, &key)?;
            Ok(result.into_inner())
        } else {
            // Update (PUT)
            let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: "update",
            })?;

            let mut ids: HashMap<&str, String> = HashMap::new();
            ids.insert("id", id.to_string());

            let available_ids: Vec<&str> = ids.keys().copied().collect();
            let path = get_path(Self::PATHS, ResourceOperation::Update, &available_ids).ok_or(
                ResourceError::PathResolutionFailed {
                    resource: Self::NAME,
                    operation: "update",
                },
            )?;

            let url = build_path(path.template, &ids);
            let full_path = Self::build_full_path(&url);

            let response = client.put(&full_path, body, None).await?;

            if !response.is_ok() {
                return Err(ResourceError::from_http_response(
                    response.code,
                    &response.body,
                    Self::NAME,
                    Some(&id.to_string()),
                    response.request_id(),
                ));
            }

            let result: ResourceResponse<Self> =
                ResourceResponse::from_http_response(response, &key)?;
            Ok(result.into_inner())
        }
    }

    /// Deletes the resource.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource doesn't exist.
    /// Returns [`ResourceError::PathResolutionFailed`] if no delete path exists.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let charge = RecurringApplicationCharge::find(&client, 123, None).await?;
    /// charge.delete(&client).await?;
    /// ```
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: "delete",
        })?;

        let mut ids: HashMap<&str, String> = HashMap::new();
        ids.insert("id", id.to_string());

        let available_ids: Vec<&str> = ids.keys().copied().collect();
        let path = get_path(Self::PATHS, ResourceOperation::Delete, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: "delete",
            },
        )?;

        let url = build_path(path.template, &ids);
        let full_path = Self::build_full_path(&url);

        let response = client.delete(&full_path, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        Ok(())
    }

    /// Counts resources matching the given parameters.
    ///
    /// # Arguments
    ///
    /// * `client` - The REST client to use
    /// * `params` - Optional parameters for filtering
    ///
    /// # Returns
    ///
    /// The count of matching resources as a `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no count path exists.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let count = Order::count(&client, None).await?;
    /// println!("Total orders: {}", count);
    /// ```
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let path = get_path(Self::PATHS, ResourceOperation::Count, &[]).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: "count",
            },
        )?;

        let url = path.template;
        let full_path = Self::build_full_path(url);

        let query = params
            .map(|p| serialize_to_query(&p))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client.get(&full_path, query).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                None,
                response.request_id(),
            ));
        }

        // Extract count from response
        let count = response
            .body
            .get("count")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                ResourceError::Http(crate::clients::HttpError::Response(
                    crate::clients::HttpResponseError {
                        code: response.code,
                        message: "Missing 'count' in response".to_string(),
                        error_reference: response.request_id().map(ToString::to_string),
                    },
                ))
            })?;

        Ok(count)
    }

    /// Builds the full path including any prefix.
    #[must_use]
    fn build_full_path(path: &str) -> String {
        Self::PREFIX.map_or_else(|| path.to_string(), |prefix| format!("{prefix}/{path}"))
    }
}

/// Serializes a resource to a JSON value for request bodies.
pub(crate) fn serialize_resource<T: Serialize>(resource: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(resource).map_err(|e| {
        ResourceError::Http(crate::clients::HttpError::Response(
            crate::clients::HttpResponseError {
                code: 400,
                message: format!("Failed to serialize resource: {e}"),
                error_reference: None,
            },
        ))
    })
}

/// Serializes a params struct to a query parameter map.
fn serialize_to_query<T: Serialize>(params: &T) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| {
        ResourceError::Http(crate::clients::HttpError::Response(
            crate::clients::HttpResponseError {
                code: 400,
                message: format!("Failed to serialize params: {e}"),
                error_reference: None,
            },
        ))
    })?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {} // Skip null values
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    // Convert arrays to comma-separated values
                    let values: Vec<String> = arr
                        .iter()
                        .filter_map(|v| match v {
                            Value::String(s) => Some(s.clone()),
                            Value::Number(n) => Some(n.to_string()),
                            _ => None,
                        })
                        .collect();
                    if !values.is_empty() {
                        query.insert(key, values.join(","));
                    }
                }
                Value::Object(_) => {
                    // For complex objects, serialize as JSON string
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
