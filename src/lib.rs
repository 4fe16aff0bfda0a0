//! # TalentCards API Rust Client
//!
//! A synchronous Rust client for the TalentCards REST API, providing
//! type-safe configuration, bearer-token authentication and resource objects
//! for the company account, its users, groups, sets and sequences.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`TalentCardsConfig`] and [`TalentCardsConfigBuilder`]
//! - A blocking HTTP [`Client`] that builds JSON:API requests and decodes responses
//! - Query string construction for `filter`, `sort` and `fields` parameters
//! - Resource objects sharing the [`Restful`] CRUD operations
//! - A [`Factory`] that constructs resources by name
//!
//! ## Quick Start
//!
//! ```rust
//! use talentcards_api::{ApiKey, TalentCardsConfig};
//!
//! let config = TalentCardsConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), talentcards_api::DEFAULT_BASE_URL);
//! ```
//!
//! ## Working with Resources
//!
//! ```rust,ignore
//! use serde_json::json;
//! use talentcards_api::{Client, Factory, Restful};
//!
//! let mut client = Client::new(&config);
//! let mut factory = Factory::new(&mut client);
//!
//! // Company-wide collections hang off the account
//! let mut account = factory.account();
//! let users = account.users().all(&json!({
//!     "filter": {"first-name": "John"},
//!     "sort": ["-email"],
//! }))?;
//!
//! // Group-scoped operations need the group's ID
//! let mut group = factory.group(12);
//! let reports = group.reports_for(34)?;
//! ```
//!
//! ## Making Raw Requests
//!
//! ```rust,ignore
//! use serde_json::json;
//! use talentcards_api::Client;
//!
//! let mut client = Client::new(&config);
//! let me = client.get("/me", &json!({}))?.response()?;
//!
//! // 4xx responses are data, not errors
//! client.get("/users/0", &json!({}))?.send()?;
//! assert_eq!(client.status_code(), Some(404));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and URLs validate on construction
//! - **Thread-safe**: Configuration and the client are `Send + Sync`
//! - **Blocking**: Each call completes its network round trip before returning
//! - **No retries**: Connection failures and 5xx responses surface as errors immediately

pub mod clients;
pub mod config;
pub mod error;
pub mod factory;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, TalentCardsConfig, TalentCardsConfigBuilder, DEFAULT_BASE_URL};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    Client, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
    ResponseBody, ResponseFormat, TransportError,
};

// Re-export resource types
pub use factory::{Factory, FactoryError, Resource};
pub use rest::resources;
pub use rest::{ResourceError, Restful};
