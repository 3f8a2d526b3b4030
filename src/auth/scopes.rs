//! OAuth scope handling for the Shopify Admin API.
//!
//! This module provides the [`AuthScopes`] type for managing OAuth scopes,
//! including parsing, deduplication, and implied scope handling.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A set of OAuth scopes for Shopify API access.
///
/// This type handles parsing, deduplication, and implied scope logic.
/// A `write_` scope implies its `read_` counterpart, so the set is stored
/// in compressed form: `read_products` is dropped when `write_products`
/// is present. The same rule applies to `unauthenticated_` scope pairs.
///
/// Compression keeps the rendered scope string canonical, so two scope
/// lists that grant the same access compare equal:
///
/// ```rust
/// use shopify_rest::AuthScopes;
///
/// let verbose: AuthScopes = "read_products,write_products".parse().unwrap();
/// let compact: AuthScopes = "write_products".parse().unwrap();
/// assert_eq!(verbose, compact);
/// assert_eq!(verbose.to_string(), "write_products");
/// ```
///
/// # Serialization
///
/// `AuthScopes` serializes to and deserializes from a comma-separated string
/// for compact JSON representation.
///
/// # Example
///
/// ```rust
/// use shopify_rest::AuthScopes;
///
/// let scopes: AuthScopes = "read_products, write_orders".parse().unwrap();
/// assert!(!scopes.is_empty());
///
/// // Check if scopes cover another set
/// let required: AuthScopes = "read_orders".parse().unwrap();
/// assert!(scopes.covers(&required));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: HashSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if this scope set covers all scopes in `other`.
    ///
    /// A scope is covered when it is present directly or when the set holds
    /// the `write_` scope that implies it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_rest::AuthScopes;
    ///
    /// let granted: AuthScopes = "write_products".parse().unwrap();
    /// let required: AuthScopes = "read_products".parse().unwrap();
    /// assert!(granted.covers(&required));
    /// ```
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        other.scopes.iter().all(|scope| {
            self.scopes.contains(scope)
                || Self::write_counterpart(scope).is_some_and(|write| self.scopes.contains(&write))
        })
    }

    /// Returns an iterator over the scopes in compressed form.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    /// Returns the `write_` scope that would imply the given `read_` scope.
    ///
    /// - `read_foo` is implied by `write_foo`
    /// - `unauthenticated_read_foo` is implied by `unauthenticated_write_foo`
    fn write_counterpart(scope: &str) -> Option<String> {
        scope
            .strip_prefix("unauthenticated_read_")
            .map(|rest| format!("unauthenticated_write_{rest}"))
            .or_else(|| {
                scope
                    .strip_prefix("read_")
                    .map(|rest| format!("write_{rest}"))
            })
    }

    /// Drops every `read_` scope whose `write_` counterpart is present.
    fn compress(scopes: HashSet<String>) -> HashSet<String> {
        scopes
            .iter()
            .filter(|scope| {
                Self::write_counterpart(scope).map_or(true, |write| !scopes.contains(&write))
            })
            .cloned()
            .collect()
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = HashSet::new();

        for scope in s.split(|c: char| c == ',' || c.is_whitespace()) {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }

            // Validate scope format (alphanumeric and underscores)
            if !scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }

            scopes.insert(scope.to_string());
        }

        Ok(Self {
            scopes: Self::compress(scopes),
        })
    }
}

impl From<Vec<String>> for AuthScopes {
    fn from(scopes: Vec<String>) -> Self {
        let scopes: HashSet<String> = scopes
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            scopes: Self::compress(scopes),
        }
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut scopes: Vec<&str> = self.scopes.iter().map(String::as_str).collect();
        scopes.sort_unstable();
        write!(f, "{}", scopes.join(","))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as a comma-separated string using the Display implementation
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
