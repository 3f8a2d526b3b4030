//! HMAC-SHA256 signature primitives for OAuth callbacks and webhooks.
//!
//! This module provides functions for computing HMAC-SHA256 signatures in the
//! two encodings Shopify uses: lowercase hex for OAuth callback parameters and
//! base64 for webhook headers.
//!
//! # Security
//!
//! All signature comparisons use constant-time comparison to prevent timing
//! attacks. Higher-level verification (including key rotation fallback) lives
//! in [`verify_message`] and [`verify_callback_params`].
//!
//! [`verify_message`]: crate::auth::oauth::verify_message
//! [`verify_callback_params`]: crate::auth::oauth::verify_callback_params
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::auth::oauth::hmac::{compute_signature, compute_signature_base64};
//!
//! // Hex-encoded signature for OAuth callbacks
//! let message = "code=abc123&shop=example.myshopify.com&state=xyz";
//! let signature = compute_signature(message, "my-api-secret");
//! assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
//!
//! // Base64-encoded signature for webhooks
//! let webhook_sig = compute_signature_base64(b"webhook payload", "my-api-secret");
//! assert_eq!(webhook_sig.len(), 44); // Base64 of 32 bytes
//! ```

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Computes the raw HMAC-SHA256 digest of a message.
#[allow(clippy::missing_panics_doc)] // HMAC accepts any key size, so this never panics
pub(crate) fn compute_mac(message: &[u8], secret: &str) -> [u8; 32] {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Computes an HMAC-SHA256 signature for the given message.
///
/// The signature is returned as a lowercase hexadecimal string, the encoding
/// Shopify uses for the `hmac` parameter on OAuth callbacks.
///
/// # Example
///
/// ```rust
/// use shopify_rest::auth::oauth::hmac::compute_signature;
///
/// let sig = compute_signature("test-message", "secret-key");
/// assert_eq!(sig.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
/// ```
#[must_use]
pub fn compute_signature(message: &str, secret: &str) -> String {
    hex::encode(compute_mac(message.as_bytes(), secret))
}

/// Computes an HMAC-SHA256 signature for raw bytes, returning base64-encoded output.
///
/// This is the encoding Shopify uses for the `X-Shopify-Hmac-Sha256` webhook
/// header. The message is taken as raw bytes to preserve the exact webhook
/// payload without UTF-8 interpretation.
///
/// # Example
///
/// ```rust
/// use shopify_rest::auth::oauth::hmac::compute_signature_base64;
///
/// let sig = compute_signature_base64(b"webhook payload", "secret-key");
/// assert_eq!(sig.len(), 44); // SHA256 produces 32 bytes = 44 base64 chars
/// ```
#[must_use]
pub fn compute_signature_base64(message: &[u8], secret: &str) -> String {
    BASE64_STANDARD.encode(compute_mac(message, secret))
}

/// Performs constant-time comparison of two strings.
///
/// This function is used for security-sensitive comparisons like HMAC
/// verification and state parameter validation to prevent timing attacks.
#[must_use]
pub fn constant_time_compare(a: &str, b: &str) -> bool {
    // ConstantTimeEq handles different lengths securely
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

// Internal hex encoding since we don't want to add another dependency
pub(crate) mod hex {
    const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut result = String::with_capacity(bytes.len() * 2);
        for &byte in bytes {
            result.push(HEX_CHARS[(byte >> 4) as usize] as char);
            result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
        }
        result
    }

    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 {
            return None;
        }
        let mut result = Vec::with_capacity(s.len() / 2);
        for pair in s.as_bytes().chunks_exact(2) {
            let high = (pair[0] as char).to_digit(16)?;
            let low = (pair[1] as char).to_digit(16)?;
            result.push(u8::try_from((high << 4) | low).ok()?);
        }
        Some(result)
    }
}
