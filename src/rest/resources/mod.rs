//! Typed REST resource implementations.
//!
//! Each resource implements [`RestResource`](crate::rest::RestResource) and
//! gains the standard `find()`, `all()`, `save()`, `delete()`, and `count()`
//! methods for the operations its paths declare. Resource-specific operations
//! (order cancellation, charge activation) are inherent methods on the
//! resource structs.
//!
//! # Available Resources
//!
//! ## Order
//!
//! Orders represent completed checkout transactions.
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::{FinancialStatus, Order, OrderAllParams};
//! use shopify_rest::rest::RestResource;
//!
//! // Find an order
//! let order = Order::find(&client, 123, None).await?;
//!
//! // List paid orders
//! let params = OrderAllParams {
//!     financial_status: Some(FinancialStatus::Paid),
//!     ..Default::default()
//! };
//! let orders = Order::all(&client, Some(params)).await?;
//!
//! // Cancel an order
//! let cancelled = order.cancel(&client, None).await?;
//! ```
//!
//! ## `RecurringApplicationCharge`
//!
//! Subscription charges that bill merchants on a recurring basis.
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::RecurringApplicationCharge;
//! use shopify_rest::rest::RestResource;
//!
//! let charge = RecurringApplicationCharge::find(&client, 455696195, None).await?;
//! let active = charge.activate(&client).await?;
//! ```
//!
//! ## Currency
//!
//! The presentment currencies enabled on a shop (list-only).
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::Currency;
//! use shopify_rest::rest::RestResource;
//!
//! let currencies = Currency::all(&client, None).await?;
//! ```
//!
//! # Shared Types
//!
//! The [`common`] module holds types shared across resources: addresses,
//! line items, money sets, refunds, and transactions.

pub mod common;
pub mod currency;
pub mod order;
pub mod recurring_application_charge;

pub use common::{
    Address, AmountSet, AmountSetEntry, ClientDetails, DiscountAllocation, DiscountApplication,
    DiscountCode, LineItem, NoteAttribute, PaymentDetails, Refund, RefundLineItem, ShippingLine,
    TaxLine, Transaction,
};
pub use currency::Currency;
pub use order::{
    CancelReason, FinancialStatus, FulfillmentStatus, Order, OrderAllParams, OrderCancelOptions,
    OrderCountParams, OrderFindParams,
};
pub use recurring_application_charge::{
    AppPlanRecurringPricing, AppPlanUsagePricing, AppRecurringPricingDetails,
    AppUsagePricingDetails, ChargeStatus, MoneyInput, RecurringApplicationCharge,
    RecurringApplicationChargeAllParams, RecurringApplicationChargeFindParams,
};
