//! REST resource infrastructure.
//!
//! This module provides the foundational infrastructure for REST resources:
//!
//! - **[`RestResource`] trait**: A standardized interface for CRUD operations
//! - **[`ResourceResponse<T>`]**: A Deref-based wrapper carrying pagination
//!   cursors and rate-limit state alongside the decoded data
//! - **[`ListOptions`]**: Shared pagination and filtering parameters
//! - **Path building**: Multiple path support for nested resources
//! - **[`ResourceError`]**: Semantic error types for resource operations
//! - **[`decode`]**: Tolerant deserialization adapters for inconsistent
//!   API payload shapes
//!
//! # Overview
//!
//! This module is the foundation for REST resource implementations. The
//! individual resources (Order, `RecurringApplicationCharge`, Currency) live
//! in the [`resources`] submodule.
//!
//! # Example: Using a Resource
//!
//! ```rust,ignore
//! use shopify_rest::rest::{ResourceResponse, RestResource};
//! use shopify_rest::rest::resources::{Order, OrderAllParams};
//!
//! // Find a single order
//! let response: ResourceResponse<Order> = Order::find(&client, 123, None).await?;
//! println!("Order: {:?}", response.name);  // Deref to Order
//!
//! // List orders with pagination
//! let response = Order::all(&client, None).await?;
//! for order in response.iter() {
//!     println!("- {:?}", order.name);
//! }
//!
//! // Check for next page
//! if response.has_next_page() {
//!     let params = OrderAllParams {
//!         list_options: shopify_rest::rest::ListOptions {
//!             page_info: response.next_page_info().map(ToString::to_string),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!     let next = Order::all(&client, Some(params)).await?;
//! }
//!
//! // Create and update
//! let order = Order { email: Some("a@b.co".to_string()), ..Default::default() };
//! let saved = order.save(&client).await?;  // POST
//!
//! // Count orders
//! let count = Order::count(&client, None).await?;
//! ```

pub mod decode;

mod errors;
mod list_options;
mod path;
mod resource;
mod response;

pub mod resources;

// Public exports
pub use errors::ResourceError;
pub use list_options::ListOptions;
pub use path::{build_path, get_path, ResourceOperation, ResourcePath};
pub use resource::RestResource;
pub use response::ResourceResponse;
