//! HTTP response types for the TalentCards API SDK.
//!
//! This module provides the raw [`HttpResponse`] returned by a transport and
//! the [`ResponseBody`] handed back to callers.

use serde_json::Value;

use crate::clients::errors::HttpError;

/// A raw response as returned by an [`HttpTransport`](crate::clients::HttpTransport).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The undecoded response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a response with the given status and body.
    #[must_use]
    pub fn new(code: u16, body: impl Into<String>) -> Self {
        Self {
            code,
            body: body.into(),
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the server reported a failure of its own (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500 && self.code <= 599
    }

    /// Decodes the body as JSON.
    ///
    /// An empty body decodes to [`Value::Null`]. Outside the 2xx range a
    /// body that is not JSON (a proxy's `Unauthorized`, an HTML error page)
    /// is handed back as [`Value::String`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if a 2xx body is not valid JSON.
    pub fn json(&self) -> Result<Value, HttpError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        match serde_json::from_str(&self.body) {
            Ok(value) => Ok(value),
            Err(_) if !self.is_ok() => Ok(Value::String(self.body.clone())),
            Err(error) => Err(HttpError::Decode(error)),
        }
    }
}

/// How [`Client::response_as`](crate::Client::response_as) should hand back the body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Decode the body as JSON.
    #[default]
    Json,
    /// Return the body text untouched.
    Text,
}

/// A response body in the format the caller asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// The decoded JSON value.
    Json(Value),
    /// The raw body text.
    Text(String),
}

impl ResponseBody {
    /// Returns the decoded value, if this body was decoded.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if this body was not decoded.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Json(_) => None,
        }
    }
}
