//! Multi-currency amount types used in order `*_set` fields.

use serde::{Deserialize, Serialize};

/// A money amount in a specific currency.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AmountSetEntry {
    /// The monetary amount as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// An amount in shop and presentment currencies.
///
/// The API returns `*_set` fields with both the shop's base currency
/// and the customer's presentment currency.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::{AmountSet, AmountSetEntry};
///
/// let amount_set = AmountSet {
///     shop_money: Some(AmountSetEntry {
///         amount: Some("19.99".to_string()),
///         currency_code: Some("USD".to_string()),
///     }),
///     presentment_money: Some(AmountSetEntry {
///         amount: Some("25.99".to_string()),
///         currency_code: Some("CAD".to_string()),
///     }),
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AmountSet {
    /// The amount in the shop's base currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_money: Option<AmountSetEntry>,

    /// The amount in the customer's presentment currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_money: Option<AmountSetEntry>,
}
