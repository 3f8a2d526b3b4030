//! Authentication types for the Shopify API client.
//!
//! - [`AuthScopes`]: a set of OAuth scopes with implied scope handling
//! - [`AssociatedUser`]: user information carried by online access tokens
//! - [`oauth`]: the OAuth authorization code and token exchange flows

mod associated_user;
pub mod oauth;
mod scopes;

pub use associated_user::AssociatedUser;
pub use scopes::AuthScopes;
