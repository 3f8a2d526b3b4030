//! Associated user information for online access tokens.
//!
//! When an app requests an online (user-specific) access token, the token
//! response includes information about the Shopify admin user who authorized
//! the app. That user information is stored in the [`AssociatedUser`] struct.

use serde::{Deserialize, Serialize};

/// The Shopify admin user tied to an online access token.
///
/// # Thread Safety
///
/// `AssociatedUser` is `Send + Sync`, making it safe to share across threads.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AssociatedUser;
///
/// let json = r#"{
///     "id": 902541635,
///     "first_name": "Jane",
///     "last_name": "Doe",
///     "email": "jane@example.com",
///     "email_verified": true,
///     "account_owner": true,
///     "locale": "en",
///     "collaborator": false
/// }"#;
///
/// let user: AssociatedUser = serde_json::from_str(json).unwrap();
/// assert_eq!(user.id, 902541635);
/// assert_eq!(user.email, "jane@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedUser {
    /// The Shopify user ID.
    pub id: u64,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,

    /// Whether the user's email has been verified.
    pub email_verified: bool,

    /// Whether the user is the account owner.
    pub account_owner: bool,

    /// The user's locale preference (e.g., "en", "fr").
    pub locale: String,

    /// Whether the user is a collaborator.
    pub collaborator: bool,
}

// Verify AssociatedUser is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AssociatedUser>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> AssociatedUser {
        AssociatedUser {
            id: 902_541_635,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            email_verified: true,
            account_owner: true,
            locale: "en".to_string(),
            collaborator: false,
        }
    }

    #[test]
    fn test_associated_user_deserialization_from_json() {
        let json = r#"{
            "id": 67890,
            "first_name": "John",
            "last_name": "Smith",
            "email": "john@example.com",
            "email_verified": false,
            "account_owner": false,
            "locale": "fr",
            "collaborator": true
        }"#;

        let user: AssociatedUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, 67890);
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Smith");
        assert_eq!(user.email, "john@example.com");
        assert!(!user.email_verified);
        assert!(!user.account_owner);
        assert_eq!(user.locale, "fr");
        assert!(user.collaborator);
    }

    #[test]
    fn test_associated_user_serialization_round_trip() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();
        let restored: AssociatedUser = serde_json::from_str(&json).unwrap();

        assert_eq!(user, restored);
    }

    #[test]
    fn test_associated_user_equality_comparison() {
        let user1 = sample_user();
        let user2 = sample_user();
        assert_eq!(user1, user2);

        let mut user3 = sample_user();
        user3.id = 99999;
        assert_ne!(user1, user3);
    }

    #[test]
    fn test_associated_user_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AssociatedUser>();
    }
}
