//! OAuth-specific error types.
//!
//! This module contains error types for OAuth operations: authorization URL
//! construction, access token requests, token exchange, and app uninstall.
//!
//! # Error Types
//!
//! - [`OAuthError::MissingRedirectUrl`]: Redirect URL not configured
//! - [`OAuthError::TokenExchangeFailed`]: Access token request failed
//! - [`OAuthError::UninstallFailed`]: App uninstall request failed
//! - [`OAuthError::Http`]: Wrapped HTTP client error
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::auth::oauth::OAuthError;
//!
//! let error = OAuthError::TokenExchangeFailed {
//!     status: 401,
//!     message: "invalid client credentials".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// Redirect URL is not configured in [`AppConfig`].
    ///
    /// Building an authorization URL requires a redirect URL for the
    /// `redirect_uri` parameter. Configure it via
    /// [`AppConfigBuilder::redirect_url`].
    ///
    /// [`AppConfig`]: crate::config::AppConfig
    /// [`AppConfigBuilder::redirect_url`]: crate::config::AppConfigBuilder::redirect_url
    #[error("Redirect URL must be configured in AppConfig for OAuth")]
    MissingRedirectUrl,

    /// An access token request failed.
    ///
    /// The POST to the token endpoint returned a non-success HTTP status,
    /// or the response body could not be parsed.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// The app uninstall request failed.
    #[error("Uninstall failed with status {status}: {message}")]
    UninstallFailed {
        /// The HTTP status code returned.
        status: u16,
        /// The error message from the response.
        message: String,
    },

    /// Wrapped HTTP client error.
    ///
    /// An error occurred during HTTP communication, such as a network failure
    /// or request validation error.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};
