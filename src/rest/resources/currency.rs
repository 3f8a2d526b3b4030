//! Currency resource.
//!
//! Shops can enable multiple presentment currencies. The currencies
//! endpoint is list-only: currencies are managed through the Shopify
//! admin, not the API.

use serde::{Deserialize, Serialize};

use crate::rest::{ResourceOperation, ResourcePath, RestResource};
use crate::HttpMethod;

/// A presentment currency enabled on a shop.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Currency {
    /// The three-letter ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Whether the currency is enabled for presentment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RestResource for Currency {
    type Id = u64;
    type FindParams = ();
    type AllParams = ();
    type CountParams = ();

    const NAME: &'static str = "Currency";
    const PLURAL: &'static str = "currencies";

    // List-only: the API exposes no single-currency endpoints.
    const PATHS: &'static [ResourcePath] = &[ResourcePath::new(
        HttpMethod::Get,
        ResourceOperation::All,
        &[],
        "currencies",
    )];

    fn get_id(&self) -> Option<Self::Id> {
        None
    }
}
