//! Webhook signature verification.
//!
//! Shopify signs each webhook delivery with an HMAC-SHA256 digest of the
//! raw request body, keyed with the app's API secret and sent
//! base64-encoded in the `X-Shopify-Hmac-Sha256` header. Handlers must
//! verify the digest before trusting the payload.
//!
//! [`verify_webhook`] answers with a boolean. [`verify_webhook_verbose`]
//! reports exactly which check failed, which is useful when diagnosing a
//! misconfigured secret or a proxy that rewrites request bodies.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::webhooks::{verify_webhook, WebhookRequest};
//! use shopify_rest::auth::oauth::compute_signature_base64;
//! use shopify_rest::{ApiKey, ApiSecretKey, AppConfig};
//!
//! let config = AppConfig::builder()
//!     .api_key(ApiKey::new("key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let body = br#"{"id":12345}"#;
//! let hmac = compute_signature_base64(body, "my-secret");
//!
//! let request = WebhookRequest::new(body.to_vec(), Some(hmac), None, None, None, None);
//! assert!(verify_webhook(&config, &request));
//! ```
//!
//! # Security
//!
//! All digest comparisons are constant time. Verification tries the
//! primary API secret key first and falls back to the old secret key when
//! one is configured, so key rotation does not drop in-flight deliveries.

use base64::prelude::*;
use subtle::ConstantTimeEq;

use crate::auth::oauth::hmac::{compute_mac, compute_signature_base64, constant_time_compare, hex};
use crate::config::AppConfig;
use crate::webhooks::WebhookError;

/// HTTP header carrying the base64-encoded HMAC-SHA256 signature.
pub const HEADER_HMAC: &str = "X-Shopify-Hmac-Sha256";

/// HTTP header carrying the webhook topic (e.g., "orders/create").
pub const HEADER_TOPIC: &str = "X-Shopify-Topic";

/// HTTP header carrying the myshopify.com domain of the originating shop.
pub const HEADER_SHOP_DOMAIN: &str = "X-Shopify-Shop-Domain";

/// HTTP header carrying the API version used for the payload format.
pub const HEADER_API_VERSION: &str = "X-Shopify-API-Version";

/// HTTP header carrying the unique delivery ID, useful for idempotency.
pub const HEADER_WEBHOOK_ID: &str = "X-Shopify-Webhook-Id";

/// An incoming webhook request from Shopify.
///
/// Holds the raw request body and the Shopify headers needed for
/// verification. The body is kept as raw bytes; re-serializing a parsed
/// payload would change the digest.
///
/// # Example
///
/// ```rust
/// use shopify_rest::webhooks::WebhookRequest;
///
/// let request = WebhookRequest::new(
///     b"raw body bytes".to_vec(),
///     Some("hmac-signature".to_string()),
///     Some("orders/create".to_string()),
///     Some("example.myshopify.com".to_string()),
///     Some("2025-04".to_string()),
///     Some("webhook-123".to_string()),
/// );
///
/// assert_eq!(request.body(), b"raw body bytes");
/// assert_eq!(request.topic(), Some("orders/create"));
/// ```
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    /// Raw request body as bytes.
    body: Vec<u8>,
    /// Value of the `X-Shopify-Hmac-Sha256` header, if present.
    hmac_header: Option<String>,
    /// Value of the `X-Shopify-Topic` header.
    topic: Option<String>,
    /// Value of the `X-Shopify-Shop-Domain` header.
    shop_domain: Option<String>,
    /// Value of the `X-Shopify-API-Version` header.
    api_version: Option<String>,
    /// Value of the `X-Shopify-Webhook-Id` header.
    webhook_id: Option<String>,
}

impl WebhookRequest {
    /// Creates a new webhook request from the raw body and header values.
    #[must_use]
    pub fn new(
        body: Vec<u8>,
        hmac_header: Option<String>,
        topic: Option<String>,
        shop_domain: Option<String>,
        api_version: Option<String>,
        webhook_id: Option<String>,
    ) -> Self {
        Self {
            body,
            hmac_header,
            topic,
            shop_domain,
            api_version,
            webhook_id,
        }
    }

    /// Returns the raw request body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the HMAC header value, if present.
    #[must_use]
    pub fn hmac_header(&self) -> Option<&str> {
        self.hmac_header.as_deref()
    }

    /// Returns the topic header value, if present.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns the shop domain header value, if present.
    #[must_use]
    pub fn shop_domain(&self) -> Option<&str> {
        self.shop_domain.as_deref()
    }

    /// Returns the API version header value, if present.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Returns the webhook delivery ID header value, if present.
    #[must_use]
    pub fn webhook_id(&self) -> Option<&str> {
        self.webhook_id.as_deref()
    }
}

/// Verifies the HMAC signature of a webhook body against a single secret.
///
/// This is the low-level boolean form. Prefer [`verify_webhook`], which
/// reads the configured secrets and supports key rotation.
///
/// # Example
///
/// ```rust
/// use shopify_rest::webhooks::verify_hmac;
/// use shopify_rest::auth::oauth::compute_signature_base64;
///
/// let body = b"webhook payload";
/// let hmac = compute_signature_base64(body, "my-secret");
///
/// assert!(verify_hmac(body, &hmac, "my-secret"));
/// assert!(!verify_hmac(body, "invalid", "my-secret"));
/// ```
#[must_use]
pub fn verify_hmac(raw_body: &[u8], hmac_header: &str, secret: &str) -> bool {
    let computed = compute_signature_base64(raw_body, secret);
    constant_time_compare(&computed, hmac_header)
}

/// Verifies a webhook payload against a single secret, reporting the exact
/// failure.
///
/// Checks run in order: the secret must be non-empty, the header must be
/// valid base64, the decoded digest must be 32 bytes, the body must be
/// non-empty, and the digests must match.
///
/// # Errors
///
/// Returns the [`WebhookError`] variant for the first failed check. On
/// [`WebhookError::DigestMismatch`] the error carries both digests
/// hex-encoded.
pub fn verify_webhook_digest(
    body: &[u8],
    hmac_header: &str,
    secret: &str,
) -> Result<(), WebhookError> {
    if secret.is_empty() {
        return Err(WebhookError::EmptySecret);
    }

    let received =
        BASE64_STANDARD
            .decode(hmac_header)
            .map_err(|_| WebhookError::InvalidHmacHeader {
                header: hmac_header.to_string(),
            })?;

    if received.len() != 32 {
        return Err(WebhookError::InvalidDigestLength {
            length: received.len(),
        });
    }

    if body.is_empty() {
        return Err(WebhookError::EmptyBody);
    }

    let computed = compute_mac(body, secret);
    if bool::from(computed.as_slice().ct_eq(&received)) {
        Ok(())
    } else {
        Err(WebhookError::DigestMismatch {
            expected: hex::encode(computed),
            received: hex::encode(&received),
        })
    }
}

/// Verifies a webhook request, reporting the exact failure.
///
/// Verification uses the configured API secret key. When an old secret key
/// is configured and the primary digest does not match, the old key is
/// tried as well.
///
/// # Errors
///
/// Returns [`WebhookError::MissingHmacHeader`] when the request carries no
/// HMAC header, otherwise the variant for the first failed check.
pub fn verify_webhook_verbose(
    config: &AppConfig,
    request: &WebhookRequest,
) -> Result<(), WebhookError> {
    let Some(hmac_header) = request.hmac_header() else {
        return Err(WebhookError::MissingHmacHeader);
    };

    let result =
        verify_webhook_digest(request.body(), hmac_header, config.api_secret_key().as_ref());

    if let (Err(WebhookError::DigestMismatch { .. }), Some(old_key)) =
        (&result, config.old_api_secret_key())
    {
        return verify_webhook_digest(request.body(), hmac_header, old_key.as_ref());
    }

    result
}

/// Verifies a webhook request.
///
/// Boolean form of [`verify_webhook_verbose`]. Handlers that only need to
/// accept or reject the delivery can branch on this directly.
#[must_use]
pub fn verify_webhook(config: &AppConfig, request: &WebhookRequest) -> bool {
    verify_webhook_verbose(config, request).is_ok()
}
