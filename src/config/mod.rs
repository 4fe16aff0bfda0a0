//! Configuration types for the TalentCards API SDK.
//!
//! This module provides the configuration used to construct a
//! [`Client`](crate::Client).
//!
//! # Overview
//!
//! - [`TalentCardsConfig`]: The configuration struct holding all SDK settings
//! - [`TalentCardsConfigBuilder`]: A builder for constructing [`TalentCardsConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use talentcards_api::{ApiKey, TalentCardsConfig};
//!
//! let config = TalentCardsConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), talentcards_api::DEFAULT_BASE_URL);
//! ```

mod newtypes;

use std::time::Duration;

pub use newtypes::ApiKey;

use crate::error::ConfigError;

/// The TalentCards company API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.talentcards.io/api/v1/company";

/// Configuration for the TalentCards API SDK.
///
/// # Thread Safety
///
/// `TalentCardsConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use talentcards_api::{ApiKey, TalentCardsConfig};
///
/// let config = TalentCardsConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .base_url("https://staging.talentcards.io/api/v1/company")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), "https://staging.talentcards.io/api/v1/company");
/// ```
#[derive(Clone, Debug)]
pub struct TalentCardsConfig {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
}

impl TalentCardsConfig {
    /// Creates a new builder for constructing a `TalentCardsConfig`.
    #[must_use]
    pub fn builder() -> TalentCardsConfigBuilder {
        TalentCardsConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL that endpoints are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify TalentCardsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TalentCardsConfig>();
};

/// Builder for constructing [`TalentCardsConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: [`DEFAULT_BASE_URL`]
/// - `timeout`: `None` (the transport's own default applies)
#[derive(Debug, Default)]
pub struct TalentCardsConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TalentCardsConfigBuilder {
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

    /// Overrides the base URL.
    ///
    /// The URL is not validated here; a malformed base URL surfaces as
    /// [`HttpError::InvalidEndpoint`](crate::HttpError::InvalidEndpoint)
    /// when the first request is built.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the timeout passed through to the HTTP transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`TalentCardsConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<TalentCardsConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(TalentCardsConfig {
            api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout,
        })
    }
}
