//! Request signature verification.
//!
//! Shopify signs OAuth callbacks with an `hmac` query parameter computed
//! over the remaining parameters. The helpers here verify those signatures
//! in constant time, also accepting signatures made with the previous API
//! secret key so rotation does not invalidate in-flight callbacks.

use subtle::ConstantTimeEq;

use crate::auth::oauth::hmac::{compute_mac, hex};
use crate::config::AppConfig;

/// Verifies a hex-encoded HMAC-SHA256 signature over a message.
///
/// Returns `false` for signatures that are not valid hex. When an old API
/// secret key is configured, a signature produced with it is also accepted.
///
/// # Example
///
/// ```rust
/// use shopify_rest::auth::oauth::{compute_signature, verify_message};
/// use shopify_rest::{ApiKey, ApiSecretKey, AppConfig};
///
/// let config = AppConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// let signature = compute_signature("shop=test-shop.myshopify.com", "secret");
/// assert!(verify_message(&config, "shop=test-shop.myshopify.com", &signature));
/// ```
#[must_use]
pub fn verify_message(config: &AppConfig, message: &str, signature: &str) -> bool {
    let Some(received) = hex::decode(signature) else {
        return false;
    };

    let computed = compute_mac(message.as_bytes(), config.api_secret_key().as_ref());
    if bool::from(computed.as_slice().ct_eq(&received)) {
        return true;
    }

    config.old_api_secret_key().is_some_and(|old_key| {
        let computed = compute_mac(message.as_bytes(), old_key.as_ref());
        bool::from(computed.as_slice().ct_eq(&received))
    })
}

/// Verifies the `hmac` parameter on an OAuth callback query.
///
/// `params` are the decoded query pairs from the callback request. The
/// signed message is those pairs with `hmac` and `signature` removed,
/// sorted by key, and joined as `key=value` pairs with `&`. Returns
/// `false` when no `hmac` parameter is present.
///
/// Call this before trading the `code` parameter for an access token.
#[must_use]
pub fn verify_callback_params(config: &AppConfig, params: &[(String, String)]) -> bool {
    let Some((_, received_hmac)) = params.iter().find(|(key, _)| key == "hmac") else {
        return false;
    };

    let mut remaining: Vec<&(String, String)> = params
        .iter()
        .filter(|(key, _)| key != "hmac" && key != "signature")
        .collect();
    remaining.sort_by(|a, b| a.0.cmp(&b.0));

    let message = remaining
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    verify_message(config, &message, received_hmac)
}
