//! Configuration errors.
//!
//! [`ConfigError`] is returned while assembling a
//! [`TalentCardsConfig`](crate::TalentCardsConfig), before any client exists.
//! Request-time failures live in [`HttpError`](crate::HttpError).
//!
//! # Example
//!
//! ```rust
//! use talentcards_api::{ApiKey, ConfigError, TalentCardsConfig};
//!
//! assert!(matches!(ApiKey::new(""), Err(ConfigError::EmptyApiKey)));
//!
//! let missing = TalentCardsConfig::builder().build();
//! assert!(matches!(
//!     missing,
//!     Err(ConfigError::MissingRequiredField { field: "api_key" })
//! ));
//! ```

use thiserror::Error;

/// Failure to build a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The bearer token was the empty string.
    #[error("API key cannot be empty. Please provide a valid TalentCards API key.")]
    EmptyApiKey,

    /// The builder was finished without a mandatory setting.
    #[error("Missing required field: '{field}'. Set it on the builder before calling build().")]
    MissingRequiredField {
        /// Builder method that was never called.
        field: &'static str,
    },
}
