//! Credential newtype.

use std::fmt;

use crate::error::ConfigError;

/// A TalentCards API token.
///
/// Every request carries it as `Authorization: Bearer <token>`. Surrounding
/// whitespace is stripped on construction, and a token that ends up empty is
/// rejected. `Debug` never prints the token.
///
/// ```rust
/// use talentcards_api::ApiKey;
///
/// let key = ApiKey::new(" my-api-key\n").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(key.bearer(), "Bearer my-api-key");
/// assert_eq!(format!("{key:?}"), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps `key` after trimming it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if nothing but whitespace was given.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if trimmed.len() == key.len() {
            Ok(Self(key))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}
