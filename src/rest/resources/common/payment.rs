//! Payment and client metadata attached to orders and transactions.

use serde::{Deserialize, Serialize};

/// Payment card details attached to a transaction.
///
/// Card numbers are masked by the API; only the last digits appear.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaymentDetails {
    /// The response code from the address verification system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_result_code: Option<String>,

    /// The issuer identification number (first digits of the card).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_bin: Option<String>,

    /// The response code from the credit card company's CVV check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv_result_code: Option<String>,

    /// The masked card number (e.g., "•••• •••• •••• 4242").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_number: Option<String>,

    /// The card brand (e.g., "Visa").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card_company: Option<String>,
}

/// Details about the browser session that placed an order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ClientDetails {
    /// The languages accepted by the browser.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_language: Option<String>,

    /// The browser screen height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_height: Option<i64>,

    /// The IP address the order was placed from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    /// The browser screen width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_width: Option<i64>,

    /// A hash of the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_hash: Option<String>,

    /// The browser's user agent string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}
