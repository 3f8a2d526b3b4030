//! Webhook verification error types.

use thiserror::Error;

/// Error describing why webhook signature verification failed.
///
/// Returned by
/// [`verify_webhook_verbose`](crate::webhooks::verify_webhook_verbose) so
/// handlers can log the exact failure. When responding to the webhook
/// sender, prefer a generic rejection over echoing these details.
///
/// # Example
///
/// ```rust
/// use shopify_rest::webhooks::WebhookError;
///
/// let error = WebhookError::InvalidDigestLength { length: 16 };
/// assert!(error.to_string().contains("length 16"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The secret used for verification was empty.
    #[error("API secret key is empty")]
    EmptySecret,

    /// The request carried no `X-Shopify-Hmac-Sha256` header.
    #[error("X-Shopify-Hmac-Sha256 header not set")]
    MissingHmacHeader,

    /// The HMAC header value was not valid base64.
    #[error("Failed to decode webhook HMAC header: {header}")]
    InvalidHmacHeader {
        /// The header value that failed to decode.
        header: String,
    },

    /// The decoded HMAC digest was not 32 bytes.
    ///
    /// An HMAC-SHA256 digest is always 32 bytes, so any other length means
    /// the header cannot be a valid signature.
    #[error("Received HMAC is not of length 32, it is of length {length}")]
    InvalidDigestLength {
        /// The length of the decoded digest.
        length: usize,
    },

    /// The webhook request body was empty.
    #[error("Webhook request body is empty")]
    EmptyBody,

    /// The computed digest did not match the received one.
    ///
    /// Both digests are carried hex-encoded for logging.
    #[error("Expected HMAC digest {expected} does not equal {received}")]
    DigestMismatch {
        /// Hex encoding of the digest computed over the body.
        expected: String,
        /// Hex encoding of the digest decoded from the header.
        received: String,
    },
}
