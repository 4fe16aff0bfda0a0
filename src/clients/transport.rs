//! The transport seam between [`Client`](crate::Client) and the network.
//!
//! [`ReqwestTransport`] is the default. Any other [`HttpTransport`] can be
//! injected with [`Client::with_transport`](crate::Client::with_transport),
//! which is how tests replay canned responses without a server.

use std::time::Duration;

use reqwest::Method;

use crate::clients::errors::TransportError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;

/// Executes a single [`HttpRequest`] and returns the raw response.
///
/// Implementations must return `Ok` for every response the server sends,
/// whatever its status code; status interpretation is the client's job.
pub trait HttpTransport: Send + Sync {
    /// Sends `request` and blocks until the response is read.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Connect`] when the server cannot be
    /// reached and [`TransportError::Other`] for any other failure.
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Creates a transport, passing `timeout` through to `reqwest`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::blocking::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self { client }
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = self
            .client
            .request(Self::method(request.method()), request.url());

        for (key, value) in request.headers() {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.body() {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send()?;

        let code = res.status().as_u16();
        let body = res.text()?;

        Ok(HttpResponse::new(code, body))
    }
}
