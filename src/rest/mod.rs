//! Resource layer for the TalentCards API.
//!
//! This module turns method calls on resource objects into requests on the
//! shared [`Client`](crate::Client):
//!
//! - **[`ResourceBase`]**: endpoint, envelope key, optional ID and the client
//!   borrow every resource embeds
//! - **[`Restful`] trait**: `all`, `find`, `create`, `update`, `replace`,
//!   `delete` and `related` with default implementations
//! - **[`ResourceError`]**: Error type for resource operations
//! - **[`resources`]**: The concrete resource types
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use talentcards_api::rest::resources::User;
//! use talentcards_api::Restful;
//!
//! let mut users = User::new(&mut client, None);
//! let created = users.create(&json!({
//!     "type": "users",
//!     "attributes": {"email": "jane@example.com"}
//! }))?;
//! let updated = users.update(42, &json!({"type": "users", "id": "42"}))?;
//! ```
//!
//! Write payloads are nested under the resource's envelope key (`data`)
//! before they are sent.

mod errors;
mod resource;
pub mod resources;

pub use errors::ResourceError;
pub use resource::{ResourceBase, Restful, DEFAULT_WRAPPER};
