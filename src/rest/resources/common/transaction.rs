//! Transaction type embedded in orders and refunds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::payment::PaymentDetails;

/// A payment transaction on an order.
///
/// Transactions record authorizations, captures, sales, voids, and
/// refunds against an order's payment.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::Transaction;
///
/// let transaction = Transaction {
///     order_id: Some(450789469),
///     kind: Some("capture".to_string()),
///     gateway: Some("bogus".to_string()),
///     amount: Some("199.99".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Transaction {
    /// The unique identifier of the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The ID of the order this transaction belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<u64>,

    /// The amount of the transaction as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The kind of transaction (e.g., "authorization", "capture", "refund").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// The payment gateway used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    /// The status of the transaction (e.g., "success", "failure").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// A message associated with the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When the transaction was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Whether this is a test transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// The authorization code from the gateway.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<String>,

    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// The ID of the physical location where the transaction occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<i64>,

    /// The ID of the user who processed the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,

    /// The ID of the parent transaction (e.g., the authorization a capture
    /// refers to).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,

    /// The ID of the device used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<i64>,

    /// A standardized error code on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// The source name (e.g., "web", "pos").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// The transaction source.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Payment card details for the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,
}
