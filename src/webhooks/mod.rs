//! Webhook request verification.
//!
//! Shopify signs each webhook delivery with an HMAC-SHA256 digest of the
//! raw request body, sent base64-encoded in the `X-Shopify-Hmac-Sha256`
//! header. This module verifies those signatures.
//!
//! - [`verify_webhook`]: boolean accept/reject
//! - [`verify_webhook_verbose`]: reports exactly which check failed
//! - [`verify_hmac`] / [`verify_webhook_digest`]: low-level forms taking an
//!   explicit secret
//!
//! Build a [`WebhookRequest`] from the raw body and Shopify headers of the
//! incoming request; the `HEADER_*` constants name the headers to extract.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::webhooks::{verify_webhook, WebhookRequest, HEADER_HMAC, HEADER_TOPIC};
//!
//! let request = WebhookRequest::new(
//!     body_bytes,
//!     headers.get(HEADER_HMAC).map(String::from),
//!     headers.get(HEADER_TOPIC).map(String::from),
//!     None,
//!     None,
//!     None,
//! );
//!
//! if !verify_webhook(&config, &request) {
//!     return Response::unauthorized();
//! }
//! ```

mod errors;
mod verification;

pub use errors::WebhookError;
pub use verification::{
    verify_hmac, verify_webhook, verify_webhook_digest, verify_webhook_verbose, WebhookRequest,
    HEADER_API_VERSION, HEADER_HMAC, HEADER_SHOP_DOMAIN, HEADER_TOPIC, HEADER_WEBHOOK_ID,
};
