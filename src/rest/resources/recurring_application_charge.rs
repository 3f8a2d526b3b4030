//! Recurring application charge resource.
//!
//! Recurring charges bill a merchant on a subscription basis. A charge is
//! created in `pending` status, approved by the merchant through the
//! confirmation URL, and then activated by the app. Capped usage-based
//! charges can be customized after activation.
//!
//! Shopify mixes naming conventions on this resource: most fields are
//! snake_case, but the pricing fields (`currencyCode`, `recurringPricing`,
//! `usagePricing` and their nested objects) are camelCase. The serde renames
//! below preserve the wire names exactly.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::decode::deserialize_flexible_timestamp;
use crate::rest::resource::serialize_resource;
use crate::rest::{
    ListOptions, ResourceError, ResourceOperation, ResourcePath, RestResource,
};
use crate::HttpMethod;

/// The lifecycle status of a recurring application charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    /// The charge is awaiting merchant approval.
    #[default]
    Pending,

    /// The merchant has accepted the charge.
    Accepted,

    /// The charge is active and billing.
    Active,

    /// The merchant declined the charge.
    Declined,

    /// The charge has expired without action.
    Expired,

    /// The charge was cancelled.
    Cancelled,

    /// The charge has been frozen while the shop is inactive.
    Frozen,
}

impl ChargeStatus {
    /// Returns `true` if the charge is pending merchant approval.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the charge is active and billing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns `true` if the charge has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns `true` if the charge was declined by the merchant.
    #[must_use]
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::Declined)
    }

    /// Returns `true` if the charge has expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }
}

/// A monetary amount with its currency, in the camelCase input shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MoneyInput {
    /// The decimal amount as a string (e.g., "10.00").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// The three-letter ISO 4217 currency code.
    #[serde(rename = "currencyCode", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}

/// The recurring portion of a charge's pricing plan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppRecurringPricingDetails {
    /// The billing interval (e.g., "EVERY_30_DAYS", "ANNUAL").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// The recurring price charged each interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<MoneyInput>,
}

/// Wrapper matching the `recurringPricing` wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppPlanRecurringPricing {
    /// The recurring pricing details.
    #[serde(
        rename = "appRecurringPricingDetails",
        skip_serializing_if = "Option::is_none"
    )]
    pub app_recurring_pricing_details: Option<AppRecurringPricingDetails>,
}

/// The usage-based portion of a charge's pricing plan.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppUsagePricingDetails {
    /// The maximum amount of usage charges per billing interval.
    #[serde(rename = "cappedAmount", skip_serializing_if = "Option::is_none")]
    pub capped_amount: Option<MoneyInput>,

    /// The terms displayed to the merchant describing usage charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

/// Wrapper matching the `usagePricing` wire shape.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppPlanUsagePricing {
    /// The usage pricing details.
    #[serde(
        rename = "appUsagePricingDetails",
        skip_serializing_if = "Option::is_none"
    )]
    pub app_usage_pricing_details: Option<AppUsagePricingDetails>,
}

/// A Shopify recurring application charge.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_rest::rest::resources::RecurringApplicationCharge;
/// use shopify_rest::rest::RestResource;
///
/// let charge = RecurringApplicationCharge {
///     name: Some("Pro Plan".to_string()),
///     price: Some("10.00".to_string()),
///     return_url: Some("https://example.com/activated".to_string()),
///     ..Default::default()
/// };
/// let charge = charge.save(&client).await?;
///
/// // After the merchant approves the charge:
/// let active = charge.activate(&client).await?;
/// assert!(active.is_active());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RecurringApplicationCharge {
    /// The charge's unique identifier (read-only).
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// The URL where the merchant approves the charge (read-only).
    #[serde(skip_serializing)]
    pub confirmation_url: Option<String>,

    /// The name of the charge shown to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The recurring price as a decimal string (e.g., "10.00").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// The URL the merchant is redirected to after approving the charge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,

    /// The three-letter ISO 4217 currency code.
    #[serde(rename = "currencyCode", skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// The billing interval (e.g., "EVERY_30_DAYS", "ANNUAL").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// The recurring pricing plan.
    #[serde(rename = "recurringPricing", skip_serializing_if = "Option::is_none")]
    pub recurring_pricing: Option<AppPlanRecurringPricing>,

    /// The usage charge cap as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capped_amount: Option<String>,

    /// The terms displayed to the merchant describing usage charges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,

    /// The usage-based pricing plan.
    #[serde(rename = "usagePricing", skip_serializing_if = "Option::is_none")]
    pub usage_pricing: Option<AppPlanUsagePricing>,

    /// The current status of the charge (read-only).
    #[serde(skip_serializing)]
    pub status: Option<ChargeStatus>,

    /// Whether this is a test charge that does not bill the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    /// The number of free trial days before billing starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<i64>,

    /// When the charge was activated (read-only).
    ///
    /// Returned as a bare date ("2024-01-15") or a full RFC 3339 timestamp
    /// depending on the endpoint.
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing
    )]
    pub activated_on: Option<DateTime<FixedOffset>>,

    /// The next billing date (read-only).
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing
    )]
    pub billing_on: Option<DateTime<FixedOffset>>,

    /// When the charge was cancelled (read-only).
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing
    )]
    pub cancelled_on: Option<DateTime<FixedOffset>>,

    /// When the charge was created (read-only).
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing
    )]
    pub created_at: Option<DateTime<FixedOffset>>,

    /// When the free trial ends (read-only).
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing
    )]
    pub trial_ends_on: Option<DateTime<FixedOffset>>,

    /// When the charge was last updated (read-only).
    #[serde(
        default,
        deserialize_with = "deserialize_flexible_timestamp",
        skip_serializing
    )]
    pub updated_at: Option<DateTime<FixedOffset>>,
}

impl RecurringApplicationCharge {
    /// Returns `true` if the charge is active and billing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_some_and(|s| s.is_active())
    }

    /// Returns `true` if the charge is pending merchant approval.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status.is_some_and(|s| s.is_pending())
    }

    /// Returns `true` if the charge has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.status.is_some_and(|s| s.is_cancelled())
    }

    /// Returns `true` if this is a test charge.
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test.unwrap_or(false)
    }

    /// Returns `true` if the charge is currently in its free trial period.
    #[must_use]
    pub fn is_in_trial(&self) -> bool {
        self.trial_ends_on
            .is_some_and(|ends_on| ends_on.with_timezone(&Utc) > Utc::now())
    }

    /// Activates a charge the merchant has approved.
    ///
    /// Sends `POST /recurring_application_charges/{id}/activate.json` with
    /// the charge in the request body and returns the activated charge.
    ///
    /// # Errors
    ///
    /// Returns an error if the charge has no ID, the request fails, or the
    /// response cannot be parsed.
    pub async fn activate(
        &self,
        client: &RestClient,
    ) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: "activate",
        })?;

        let path = format!("{}/{id}/activate", Self::PLURAL);
        let body = serde_json::json!({ Self::resource_key(): serialize_resource(self)? });
        let response = client.post(&path, body, None).await?;

        Self::extract_charge(&response, &id.to_string())
    }

    /// Updates the capped amount of an active usage-based charge.
    ///
    /// Sends `PUT /recurring_application_charges/{id}/customize.json` with
    /// the new cap in the `recurring_application_charge[capped_amount]`
    /// query parameter. The merchant must approve the change through the
    /// returned charge's `confirmation_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the charge has no ID, the request fails, or the
    /// response cannot be parsed.
    pub async fn customize(
        &self,
        client: &RestClient,
        new_capped_amount: &str,
    ) -> Result<Self, ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: "customize",
        })?;

        let path = format!("{}/{id}/customize", Self::PLURAL);
        let query = std::collections::HashMap::from([(
            format!("{}[capped_amount]", Self::resource_key()),
            new_capped_amount.to_string(),
        )]);
        let response = client
            .put(&path, serde_json::json!({}), Some(query))
            .await?;

        Self::extract_charge(&response, &id.to_string())
    }

    /// Unwraps a charge from a custom operation response.
    fn extract_charge(
        response: &crate::clients::HttpResponse,
        id: &str,
    ) -> Result<Self, ResourceError> {
        if !response.is_ok() {
            return Err(ResourceError::from_http_response(
                response.code,
                &response.body,
                Self::NAME,
                Some(id),
                response.request_id(),
            ));
        }

        let key = Self::resource_key();
        response
            .body
            .get(&key)
            .ok_or_else(|| {
                ResourceError::Http(crate::clients::HttpError::Response(
                    crate::clients::HttpResponseError {
                        code: response.code,
                        message: format!("Missing '{key}' in response"),
                        error_reference: response.request_id().map(ToString::to_string),
                    },
                ))
            })
            .and_then(|value| {
                serde_json::from_value(value.clone()).map_err(|e| {
                    ResourceError::Http(crate::clients::HttpError::Response(
                        crate::clients::HttpResponseError {
                            code: response.code,
                            message: format!("Failed to parse response: {e}"),
                            error_reference: response.request_id().map(ToString::to_string),
                        },
                    ))
                })
            })
    }
}

/// Query parameters for finding a single recurring application charge.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationChargeFindParams {
    /// Comma-separated list of fields to include in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query parameters for listing recurring application charges.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RecurringApplicationChargeAllParams {
    /// Standard list options (pagination, `since_id`, field selection).
    #[serde(flatten)]
    pub list_options: ListOptions,

    /// Filter charges by status (e.g., "active", "pending").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RestResource for RecurringApplicationCharge {
    type Id = u64;
    type FindParams = RecurringApplicationChargeFindParams;
    type AllParams = RecurringApplicationChargeAllParams;
    type CountParams = ();

    const NAME: &'static str = "RecurringApplicationCharge";
    const PLURAL: &'static str = "recurring_application_charges";

    // Charges cannot be counted, and updates go through customize().
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["id"],
            "recurring_application_charges/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &[],
            "recurring_application_charges",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &[],
            "recurring_application_charges",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "recurring_application_charges/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }

    // The default would produce "recurringapplicationcharge".
    fn resource_key() -> String {
        "recurring_application_charge".to_string()
    }
}
