//! OAuth authorization flows and signature verification.
//!
//! Supports the authorization code grant for public apps:
//!
//! 1. Build the authorization URL with [`authorize_url`] and redirect the
//!    merchant to it, keeping the [`StateParam`] in their session.
//! 2. On the callback, check the returned state against the stored one and
//!    verify the query signature with [`verify_callback_params`].
//! 3. Trade the `code` parameter for an access token with
//!    [`get_access_token`].
//!
//! Embedded apps can skip the redirect round trip and exchange their
//! session ID tokens directly via [`exchange_offline_token`] or
//! [`exchange_online_token`].

mod authorize;
mod error;
pub mod hmac;
mod state;
mod tokens;
mod verify;

pub use authorize::authorize_url;
pub use error::OAuthError;
pub use hmac::{compute_signature, compute_signature_base64, constant_time_compare};
pub use state::StateParam;
pub use tokens::{
    exchange_offline_token, exchange_online_token, exchange_token_with, get_access_token,
    get_access_token_with, uninstall, uninstall_with, AccessTokenResponse, RequestedTokenType,
    ACCESS_TOKEN_PATH,
};
pub use verify::{verify_callback_params, verify_message};
