//! Common types embedded within REST resources.
//!
//! This module provides shared types that are nested inside other
//! resources, such as addresses, line items, tax lines, and transactions.
//!
//! These types are not full REST resources themselves (they don't implement
//! `RestResource`), but are used as nested data within resources like
//! [`Order`](crate::rest::resources::Order).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::common::{Address, LineItem, TaxLine};
//!
//! // Address is embedded in orders for billing and shipping
//! let address = Address {
//!     first_name: Some("John".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     address1: Some("123 Main St".to_string()),
//!     city: Some("New York".to_string()),
//!     province: Some("New York".to_string()),
//!     country: Some("United States".to_string()),
//!     zip: Some("10001".to_string()),
//!     ..Default::default()
//! };
//! ```

mod address;
mod line_item;
mod money;
mod payment;
mod refund;
mod transaction;

pub use address::Address;
pub use line_item::{
    DiscountAllocation, DiscountApplication, DiscountCode, LineItem, ShippingLine, TaxLine,
};
pub use money::{AmountSet, AmountSetEntry};
pub use payment::{ClientDetails, PaymentDetails};
pub use refund::{Refund, RefundLineItem};
pub use transaction::Transaction;

// Property pairs are defined next to their decoder.
pub use crate::rest::decode::NoteAttribute;
