//! Error types for resource operations.
//!
//! Resource operations fail either because the underlying HTTP exchange
//! failed ([`ResourceError::Http`]) or because an operation that targets the
//! resource itself was called on an object constructed without an ID
//! ([`ResourceError::MissingId`]).
//!
//! # Example
//!
//! ```rust,ignore
//! use talentcards_api::rest::{ResourceError, Restful};
//!
//! match user.delete() {
//!     Ok(_) => println!("deleted"),
//!     Err(ResourceError::MissingId { resource, .. }) => {
//!         println!("{resource} was built without an id");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The HTTP layer failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The operation needs the resource's own ID but none was given.
    #[error("Cannot {operation} a {resource} without an id. Construct it with an id first.")]
    MissingId {
        /// The resource type name (e.g., "Group").
        resource: &'static str,
        /// The operation that was attempted.
        operation: &'static str,
    },
}
