//! HTTP-specific error types for the TalentCards API SDK.
//!
//! # Error Handling
//!
//! - [`HttpError::InvalidEndpoint`]: the request URL is malformed; raised
//!   while the request is built, before any network I/O
//! - [`HttpError::Connection`]: the server could not be reached
//! - [`HttpError::BadResponse`]: the server answered with a 5xx status
//! - [`HttpError::Transport`]: any other transport failure
//! - [`HttpError::Decode`] / [`HttpError::Serialize`]: JSON failures
//!
//! 4xx responses are not errors. Their body is returned like any other and
//! callers inspect [`Client::status_code`](crate::Client::status_code).
//!
//! # Example
//!
//! ```rust,ignore
//! use talentcards_api::HttpError;
//!
//! match client.get("/me", &json!({}))?.response() {
//!     Ok(body) => println!("Me: {body}"),
//!     Err(HttpError::Connection) => eprintln!("offline"),
//!     Err(HttpError::BadResponse { code }) => eprintln!("server error {code}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Message carried by [`HttpError::Connection`].
pub const CONNECTION_ERROR_MESSAGE: &str = "Could not connect to the TalentCards server. Please check your internet connectivity and try again later.";

/// Message carried by [`HttpError::BadResponse`].
pub const BAD_RESPONSE_MESSAGE: &str = "The TalentCards API is experiencing some issues.";

/// Message carried by [`HttpError::InvalidEndpoint`].
pub const INVALID_ENDPOINT_MESSAGE: &str = "Error invalid endpoint provided";

/// Failure reported by an [`HttpTransport`](crate::clients::HttpTransport).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server could not be reached (DNS, refused connection, timeout).
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Any other failure while exchanging the request.
    #[error("Transport failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_connect() || error.is_timeout() {
            Self::Connect(error.to_string())
        } else {
            Self::Other(error.to_string())
        }
    }
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Base URL plus endpoint is not a well-formed absolute URL.
    #[error("{INVALID_ENDPOINT_MESSAGE}")]
    InvalidEndpoint {
        /// The URL that failed validation.
        url: String,
    },

    /// The server could not be reached.
    #[error("{CONNECTION_ERROR_MESSAGE}")]
    Connection,

    /// The server answered with a 5xx status.
    #[error("{BAD_RESPONSE_MESSAGE}")]
    BadResponse {
        /// The HTTP status code of the response.
        code: u16,
    },

    /// The transport failed for a reason other than connectivity.
    #[error("Network error: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
    },

    /// A 2xx response body is not valid JSON.
    #[error("Failed to decode response body as JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// `response()` was called before any request was built.
    #[error("No request has been built. Call get, post, put, patch or delete first.")]
    NoPendingRequest,
}

impl From<TransportError> for HttpError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Connect(_) => Self::Connection,
            TransportError::Other(message) => Self::Transport { message },
        }
    }
}
