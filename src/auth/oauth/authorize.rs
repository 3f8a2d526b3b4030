//! OAuth authorization URL generation.
//!
//! This module provides the [`authorize_url`] function for building the
//! Shopify OAuth authorization URL that users are redirected to when
//! installing an app.

use crate::auth::oauth::error::OAuthError;
use crate::auth::oauth::state::StateParam;
use crate::config::{AppConfig, ShopDomain};

/// Builds the OAuth authorization URL for a shop.
///
/// This is the first step in the authorization code flow. Redirect the user
/// to the returned URL; Shopify asks them to approve the requested scopes
/// and then redirects back to the configured redirect URL with an
/// authorization code.
///
/// The query string carries `client_id`, `redirect_uri`, `scope`, and
/// `state`, percent-encoded and ordered by parameter name. An empty state
/// is omitted.
///
/// # Errors
///
/// Returns [`OAuthError::MissingRedirectUrl`] if `config.redirect_url()`
/// is `None`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::auth::oauth::{authorize_url, StateParam};
/// use shopify_rest::{ApiKey, ApiSecretKey, AppConfig, HostUrl, ShopDomain};
///
/// let config = AppConfig::builder()
///     .api_key(ApiKey::new("api-key").unwrap())
///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
///     .redirect_url(HostUrl::new("https://myapp.example.com/auth/callback").unwrap())
///     .scopes("read_products".parse().unwrap())
///     .build()
///     .unwrap();
///
/// let shop = ShopDomain::new("test-shop").unwrap();
/// let state = StateParam::new();
///
/// // Store the state in the user's session, then redirect to the URL.
/// let url = authorize_url(&config, &shop, &state).unwrap();
/// assert!(url.starts_with("https://test-shop.myshopify.com/admin/oauth/authorize?"));
/// assert!(url.contains("scope=read_products"));
/// ```
pub fn authorize_url(
    config: &AppConfig,
    shop: &ShopDomain,
    state: &StateParam,
) -> Result<String, OAuthError> {
    let redirect_url = config
        .redirect_url()
        .ok_or(OAuthError::MissingRedirectUrl)?;

    let scope = config.scopes().to_string();
    let mut params = vec![
        ("client_id", config.api_key().as_ref()),
        ("redirect_uri", redirect_url.as_ref()),
        ("scope", &scope),
    ];
    if !state.as_ref().is_empty() {
        params.push(("state", state.as_ref()));
    }

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!(
        "https://{}/admin/oauth/authorize?{}",
        shop.as_ref(),
        query_string
    ))
}
