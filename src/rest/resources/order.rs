//! Order resource implementation.
//!
//! This module provides the [`Order`] resource for managing orders.
//! Orders represent completed checkout transactions.
//!
//! # Resource-Specific Operations
//!
//! In addition to standard CRUD operations, the Order resource provides:
//! - [`Order::cancel`] - Cancel an order, optionally refunding and restocking
//! - [`Order::close`] - Close an order
//! - [`Order::open`] - Re-open a closed order
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{RestResource, ResourceResponse};
//! use shopify_rest::rest::resources::{Order, OrderAllParams, FinancialStatus};
//!
//! // Find a single order
//! let order = Order::find(&client, 123, None).await?;
//! println!("Order: {}", order.name.as_deref().unwrap_or(""));
//!
//! // List orders with filters
//! let params = OrderAllParams {
//!     financial_status: Some(FinancialStatus::Paid),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, Some(params)).await?;
//!
//! // Cancel an order
//! let cancelled = order.cancel(&client, None).await?;
//!
//! // Close and re-open
//! let closed = order.close(&client).await?;
//! let reopened = closed.open(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resource::serialize_resource;
use crate::rest::{
    ListOptions, ResourceError, ResourceOperation, ResourcePath, RestResource,
};
use crate::HttpMethod;

use super::common::{
    Address, ClientDetails, DiscountApplication, DiscountCode, LineItem, NoteAttribute,
    PaymentDetails, Refund, ShippingLine,
};

/// The financial status of an order.
///
/// Indicates the payment status of the order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    /// Payment is pending.
    #[default]
    Pending,
    /// Payment has been authorized but not captured.
    Authorized,
    /// Payment has been partially paid.
    PartiallyPaid,
    /// Payment has been fully captured.
    Paid,
    /// Payment has been partially refunded.
    PartiallyRefunded,
    /// Payment has been fully refunded.
    Refunded,
    /// Payment authorization has been voided.
    Voided,
}

/// The fulfillment status of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    /// All line items have been fulfilled.
    Fulfilled,
    /// Some line items have been fulfilled.
    Partial,
    /// No line items have been fulfilled.
    Unfulfilled,
    /// Items have been restocked.
    Restocked,
}

/// The reason for cancelling an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// Customer requested cancellation.
    Customer,
    /// Order was identified as fraudulent.
    Fraud,
    /// Items were out of stock.
    Inventory,
    /// Payment was declined.
    Declined,
    /// Other reason for cancellation.
    Other,
}

/// An order.
///
/// Orders represent completed checkout transactions including the line
/// items, addresses, discounts, and payment status.
///
/// # Read-Only Fields
///
/// The following fields are read-only and will not be sent in create/update
/// requests: `id`, `name`, `confirmation_number`, `created_at`, `updated_at`.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::rest::resources::Order;
///
/// let order = Order {
///     email: Some("customer@example.com".to_string()),
///     tags: Some("vip".to_string()),
///     ..Default::default()
/// };
/// let saved = order.save(&client).await?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    // --- Read-only fields (not serialized) ---
    /// The unique identifier of the order.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The order name (e.g., "#1001").
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// The randomly generated confirmation number.
    #[serde(skip_serializing)]
    pub confirmation_number: Option<String>,

    /// When the order was created.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// When the order was last updated.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    // --- Core fields ---
    /// The customer's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_at: Option<DateTime<Utc>>,

    /// The reason the order was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<CancelReason>,

    /// When the order was processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    /// The subtotal price (before taxes and shipping) as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,

    /// Whether taxes are included in the prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    /// The financial status of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// The fulfillment status of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// The total price including taxes and discounts as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    /// The total discount amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,

    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The source name (e.g., "web", "pos").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    /// The checkout token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_token: Option<String>,

    /// Custom note attributes (key-value pairs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_attributes: Option<Vec<NoteAttribute>>,

    // --- Nested structures ---
    /// The line items in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,

    /// Discount applications on the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_applications: Option<Vec<DiscountApplication>>,

    /// Discount codes applied at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_codes: Option<Vec<DiscountCode>>,

    /// The billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    /// Shipping lines for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_lines: Option<Vec<ShippingLine>>,

    /// Refunds issued against the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<Vec<Refund>>,

    /// Details about the browser session that placed the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,

    /// Payment card details for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
}

impl RestResource for Order {
    type Id = u64;
    type FindParams = OrderFindParams;
    type AllParams = OrderAllParams;
    type CountParams = OrderCountParams;

    const NAME: &'static str = "Order";
    const PLURAL: &'static str = "orders";

    // Orders cannot be deleted through the API, so no Delete path exists.
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "orders/{id}",
        ),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders"),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &[],
            "orders/count",
        ),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "orders"),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["id"],
            "orders/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Order {
    /// Cancels the order.
    ///
    /// Sends a POST request to `orders/{id}/cancel.json`. Pass
    /// [`OrderCancelOptions`] to control refunding, restocking, and
    /// customer notification.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the order has no ID.
    /// Returns [`ResourceError::NotFound`] if the order doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use shopify_rest::rest::resources::{CancelReason, OrderCancelOptions};
    ///
    /// let order = Order::find(&client, 123, None).await?;
    /// let options = OrderCancelOptions {
    ///     reason: Some(CancelReason::Customer),
    ///     restock: Some(true),
    ///     ..Default::default()
    /// };
    /// let cancelled = order.cancel(&client, Some(options)).await?;
    /// assert!(cancelled.cancelled_at.is_some());
    /// ```
    pub async fn cancel(
        &self,
        client: &RestClient,
        options: Option<OrderCancelOptions>,
    ) -> Result<Self, ResourceError> {
        let body = match options {
            Some(options) => serialize_resource(&options)?,
            None => serde_json::json!({}),
        };
        self.lifecycle_post(client, "cancel", body).await
    }

    /// Closes the order.
    ///
    /// Sends a POST request to `orders/{id}/close.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the order has no ID.
    /// Returns [`ResourceError::NotFound`] if the order doesn't exist.
    pub async fn close(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.lifecycle_post(client, "close", serde_json::json!({}))
            .await
    }

    /// Re-opens a closed order.
    ///
    /// Sends a POST request to `orders/{id}/open.json`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the order has no ID.
    /// Returns [`ResourceError::NotFound`] if the order doesn't exist.
    pub async fn open(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.lifecycle_post(client, "open", serde_json::json!({}))
            .await
    }

    /// Sends a lifecycle POST and unwraps the returned order.
    async fn lifecycle_post(
        &self,
        client: &RestClient,
        action: &'static str,
        body: serde_json::Value,
    ) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: action,
        })?;

        let path = format!("orders/{id}/{action}");
        let response = client.post(&path, body, None).await?;

        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(&id.to_string()),
                response.request_id(),
            ));
        }

        // The API returns the order wrapped in an "order" key
        response
            .body
            .get("order")
            .ok_or_else(|| {
                ResourceError::Http(crate::clients::HttpError::Response(
                    crate::clients::HttpResponseError {
                        code: response.code,
                        message: "Missing 'order' in response".to_string(),
                        error_reference: response.request_id().map(ToString::to_string),
                    },
                ))
            })
            .and_then(|v| {
                serde_json::from_value(v.clone()).map_err(|e| {
                    ResourceError::Http(crate::clients::HttpError::Response(
                        crate::clients::HttpResponseError {
                            code: response.code,
                            message: format!("Failed to deserialize order: {e}"),
                            error_reference: response.request_id().map(ToString::to_string),
                        },
                    ))
                })
            })
    }
}

/// Parameters for finding a single order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing orders.
///
/// Shared pagination and date-window options come from [`ListOptions`];
/// the remaining fields are order-specific filters.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderAllParams {
    /// Shared list options (pagination, date windows, field selection).
    #[serde(flatten)]
    pub list_options: ListOptions,

    /// Filter by order status ("open", "closed", "cancelled", "any").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Filter by financial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Filter by fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// Show orders processed at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,

    /// Show orders processed at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,

    /// The sort order of results (e.g., "processed_at desc").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Parameters for counting orders.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct OrderCountParams {
    /// Shared list options (date windows, field selection).
    #[serde(flatten)]
    pub list_options: ListOptions,

    /// Filter by order status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Filter by financial status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    /// Filter by fulfillment status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    /// Count orders processed at or after this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,

    /// Count orders processed at or before this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,

    /// The sort order applied before counting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

/// Options for cancelling an order.
///
/// Sent as the body of the `orders/{id}/cancel.json` request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderCancelOptions {
    /// The amount to refund as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The currency of the refund amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Whether to restock the order's line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,

    /// The reason for cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CancelReason>,

    /// Whether to email the customer about the cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,

    /// A refund to issue as part of the cancellation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<Refund>,
}
