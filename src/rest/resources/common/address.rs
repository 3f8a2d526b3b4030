//! Address type shared by order billing and shipping fields.

use serde::{Deserialize, Serialize};

/// A physical address used for billing or shipping.
///
/// All fields are optional to support partial address data.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::common::Address;
///
/// let address = Address {
///     first_name: Some("John".to_string()),
///     last_name: Some("Doe".to_string()),
///     address1: Some("123 Main St".to_string()),
///     city: Some("New York".to_string()),
///     province: Some("New York".to_string()),
///     province_code: Some("NY".to_string()),
///     country: Some("United States".to_string()),
///     country_code: Some("US".to_string()),
///     zip: Some("10001".to_string()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Address {
    /// The unique identifier of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The first line of the address (street address).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,

    /// The second line of the address (apartment, suite, etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,

    /// The city, town, or village.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// The company name at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// The country name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// The two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    /// The first name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The last name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The latitude of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    /// The longitude of the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    /// The full name of the person at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The phone number at the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The province, state, or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    /// The two-letter province or state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_code: Option<String>,

    /// The postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}
