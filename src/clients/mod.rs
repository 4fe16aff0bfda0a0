//! HTTP client types for TalentCards API communication.
//!
//! This module provides the request/response layer every resource object
//! delegates to.
//!
//! # Overview
//!
//! - [`Client`]: The synchronous HTTP client for API communication
//! - [`HttpRequest`]: An immutable request descriptor built by a verb call
//! - [`HttpResponse`]: A raw response returned by a transport
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpTransport`]: The seam between the client and the network
//! - [`build_query`] / [`build_url`]: Query string and URL construction
//!
//! # Example
//!
//! ```rust,ignore
//! use serde_json::json;
//! use talentcards_api::{ApiKey, Client, TalentCardsConfig};
//!
//! let config = TalentCardsConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! let mut client = Client::new(&config);
//!
//! let users = client
//!     .get("/users", &json!({"sort": ["-email"]}))?
//!     .response()?;
//! ```
//!
//! # Failure Behavior
//!
//! Nothing is retried. Connection failures and 5xx responses become
//! [`HttpError`] values; every other status code is returned as data.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;
mod transport;

pub use errors::{
    HttpError, TransportError, BAD_RESPONSE_MESSAGE, CONNECTION_ERROR_MESSAGE,
    INVALID_ENDPOINT_MESSAGE,
};
pub use http_client::Client;
pub use http_request::{HttpMethod, HttpRequest, MEDIA_TYPE};
pub use http_response::{HttpResponse, ResponseBody, ResponseFormat};
pub use query::{build_query, build_url};
pub use transport::{HttpTransport, ReqwestTransport};
