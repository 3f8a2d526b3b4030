//! Configuration types for the API client.
//!
//! This module provides the core configuration types used to initialize
//! the client library for API communication with Shopify.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`AppConfig`]: The main configuration struct holding app credentials and settings
//! - [`AppConfigBuilder`]: A builder for constructing [`AppConfig`] instances
//! - [`ApiKey`]: A validated API key newtype
//! - [`ApiSecretKey`]: A validated API secret key newtype with masked debug output
//! - [`ShopDomain`]: A validated Shopify shop domain
//! - [`HostUrl`]: A validated OAuth redirect URL
//! - [`ApiVersion`]: The Shopify API version to use
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::{AppConfig, ApiKey, ApiSecretKey, ApiVersion};
//!
//! let config = AppConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_secret_key(ApiSecretKey::new("my-secret").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiKey, ApiSecretKey, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Configuration describing a Shopify app.
///
/// This struct holds everything needed to talk to the API on behalf of an
/// app: API credentials, OAuth scopes, the redirect URL for the OAuth
/// callback, and the API version to pin requests to.
///
/// # Thread Safety
///
/// `AppConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Key Rotation
///
/// The `old_api_secret_key` field supports seamless key rotation. When
/// validating HMAC signatures, the library tries the primary key first,
/// then falls back to the old key if configured. This allows in-flight
/// OAuth flows to complete during key rotation.
///
/// # Example
///
/// ```rust
/// use shopify_rest::{AppConfig, ApiKey, ApiSecretKey};
///
/// let config = AppConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .api_secret_key(ApiSecretKey::new("your-secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.api_key().as_ref(), "your-api-key");
/// ```
#[derive(Clone, Debug)]
pub struct AppConfig {
    api_key: ApiKey,
    api_secret_key: ApiSecretKey,
    old_api_secret_key: Option<ApiSecretKey>,
    scopes: AuthScopes,
    redirect_url: Option<HostUrl>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl AppConfig {
    /// Creates a new builder for constructing an `AppConfig`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{AppConfig, ApiKey, ApiSecretKey};
    ///
    /// let config = AppConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API secret key.
    #[must_use]
    pub const fn api_secret_key(&self) -> &ApiSecretKey {
        &self.api_secret_key
    }

    /// Returns the old API secret key, if configured.
    ///
    /// This is used during key rotation to validate HMAC signatures
    /// created with the previous secret key.
    #[must_use]
    pub const fn old_api_secret_key(&self) -> Option<&ApiSecretKey> {
        self.old_api_secret_key.as_ref()
    }

    /// Returns the OAuth scopes.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the OAuth redirect URL, if configured.
    #[must_use]
    pub const fn redirect_url(&self) -> Option<&HostUrl> {
        self.redirect_url.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify AppConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AppConfig>();
};

/// Builder for constructing [`AppConfig`] instances.
///
/// This builder provides a fluent API for configuring the client. Required
/// fields are `api_key` and `api_secret_key`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `scopes`: Empty
/// - `redirect_url`: `None`
/// - `user_agent_prefix`: `None`
/// - `old_api_secret_key`: `None`
///
/// # Example
///
/// ```rust
/// use shopify_rest::{AppConfig, ApiKey, ApiSecretKey, ApiVersion, HostUrl};
///
/// let config = AppConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_secret_key(ApiSecretKey::new("secret").unwrap())
///     .api_version(ApiVersion::V2024_10)
///     .redirect_url(HostUrl::new("https://myapp.example.com/callback").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    api_key: Option<ApiKey>,
    api_secret_key: Option<ApiSecretKey>,
    old_api_secret_key: Option<ApiSecretKey>,
    scopes: Option<AuthScopes>,
    redirect_url: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl AppConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API secret key (required).
    #[must_use]
    pub fn api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.api_secret_key = Some(key);
        self
    }

    /// Sets the old API secret key for key rotation support.
    ///
    /// When validating HMAC signatures, the library tries the primary
    /// secret key first, then falls back to this old key if validation
    /// fails. This allows in-flight OAuth flows to complete during key
    /// rotation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::{AppConfig, ApiKey, ApiSecretKey};
    ///
    /// // During key rotation, configure both keys
    /// let config = AppConfig::builder()
    ///     .api_key(ApiKey::new("key").unwrap())
    ///     .api_secret_key(ApiSecretKey::new("new-secret").unwrap())
    ///     .old_api_secret_key(ApiSecretKey::new("old-secret").unwrap())
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn old_api_secret_key(mut self, key: ApiSecretKey) -> Self {
        self.old_api_secret_key = Some(key);
        self
    }

    /// Sets the OAuth scopes.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the OAuth redirect URL.
    #[must_use]
    pub fn redirect_url(mut self, url: HostUrl) -> Self {
        self.redirect_url = Some(url);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`AppConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_secret_key` are not set.
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_secret_key = self
            .api_secret_key
            .ok_or(ConfigError::MissingRequiredField {
                field: "api_secret_key",
            })?;

        Ok(AppConfig {
            api_key,
            api_secret_key,
            old_api_secret_key: self.old_api_secret_key,
            scopes: self.scopes.unwrap_or_default(),
            redirect_url: self.redirect_url,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
