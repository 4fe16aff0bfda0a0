//! HTTP client for TalentCards API communication.
//!
//! This module provides the [`Client`] type. Requests are issued in two
//! phases: a verb method (`get`, `post`, `put`, `patch`, `delete`) builds a
//! request descriptor and keeps it as the pending request, then
//! [`Client::response`] (or one of its siblings) sends it and decodes the
//! reply. Resource objects rely on this split to adjust their endpoint
//! before anything goes over the wire.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, MEDIA_TYPE};
use crate::clients::http_response::{HttpResponse, ResponseBody, ResponseFormat};
use crate::clients::query::{build_query, build_url};
use crate::clients::transport::{HttpTransport, ReqwestTransport};
use crate::config::{ApiKey, TalentCardsConfig};

/// Synchronous client for the TalentCards REST API.
///
/// The client handles:
/// - URL construction from the base URL, an endpoint and query parameters
/// - The fixed `Accept`, `Content-Type` and `Authorization` headers
/// - Mapping connection failures and 5xx responses to [`HttpError`]
///
/// It keeps the last built request and the last response so callers can
/// inspect them after the fact. 4xx responses are returned like any other;
/// check [`Client::status_code`] to tell them apart.
///
/// # Example
///
/// ```rust,ignore
/// use serde_json::json;
/// use talentcards_api::{ApiKey, Client, TalentCardsConfig};
///
/// let config = TalentCardsConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .build()
///     .unwrap();
/// let mut client = Client::new(&config);
///
/// let me = client.get("/me", &json!({}))?.response()?;
/// println!("{} -> {me}", client.status_code().unwrap_or_default());
/// ```
pub struct Client {
    transport: Box<dyn HttpTransport>,
    api_key: ApiKey,
    url: String,
    request: Option<HttpRequest>,
    response: Option<HttpResponse>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &self.api_key)
            .field("url", &self.url)
            .field("request", &self.request)
            .field("status_code", &self.status_code())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client that talks to the network through [`ReqwestTransport`].
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. See
    /// [`ReqwestTransport::new`].
    #[must_use]
    pub fn new(config: &TalentCardsConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new(config.timeout()))
    }

    /// Creates a client that sends requests through `transport`.
    #[must_use]
    pub fn with_transport(config: &TalentCardsConfig, transport: impl HttpTransport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            api_key: config.api_key().clone(),
            url: config.base_url().to_string(),
            request: None,
            response: None,
        }
    }

    /// Replaces the API key used for subsequent requests.
    pub fn set_key(&mut self, key: ApiKey) -> &mut Self {
        self.api_key = key;
        self
    }

    /// Replaces the transport used for subsequent requests.
    pub fn set_transport(&mut self, transport: impl HttpTransport + 'static) -> &mut Self {
        self.transport = Box::new(transport);
        self
    }

    /// Returns the base URL endpoints are appended to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replaces the base URL.
    ///
    /// The URL is validated when the next request is built.
    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = url.into();
        self
    }

    /// Returns the headers sent with every request.
    ///
    /// The result only depends on the current API key.
    #[must_use]
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("Accept".to_string(), MEDIA_TYPE.to_string()),
            ("Authorization".to_string(), self.api_key.bearer()),
            ("Content-Type".to_string(), MEDIA_TYPE.to_string()),
        ]
    }

    /// Builds the query string for `parameters`. See [`build_query`].
    #[must_use]
    pub fn build_query(&self, parameters: &Value) -> String {
        build_query(parameters)
    }

    /// Joins the base URL, `endpoint` and `query`. See [`build_url`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidEndpoint`] if the base URL plus
    /// `endpoint` is not a well-formed absolute URL.
    pub fn build_url(&self, endpoint: &str, query: &str) -> Result<String, HttpError> {
        build_url(&self.url, endpoint, query)
    }

    /// Builds a request and stores it as the pending request.
    ///
    /// `body` is serialized only when it carries data: `null`, `{}` and `[]`
    /// produce a request without a body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidEndpoint`] if the URL is malformed and
    /// [`HttpError::Serialize`] if `body` cannot be encoded. The previous
    /// pending request is left untouched in both cases.
    pub fn build_request(
        &mut self,
        endpoint: &str,
        method: HttpMethod,
        body: &Value,
        query: &Value,
    ) -> Result<&mut Self, HttpError> {
        let encoded_body = if is_empty(body) {
            None
        } else {
            Some(serde_json::to_string(body).map_err(HttpError::Serialize)?)
        };

        let query_string = if is_empty(query) {
            String::new()
        } else {
            self.build_query(query)
        };

        let url = self.build_url(endpoint, &query_string)?;

        tracing::debug!(method = %method, url = %url, "Built TalentCards request");

        self.request = Some(HttpRequest::new(method, url, self.headers(), encoded_body));
        Ok(self)
    }

    /// Prepares a GET request for `endpoint` with query `parameters`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidEndpoint`] if the URL is malformed.
    pub fn get(&mut self, endpoint: &str, parameters: &Value) -> Result<&mut Self, HttpError> {
        self.build_request(endpoint, HttpMethod::Get, &Value::Null, parameters)
    }

    /// Prepares a POST request for `endpoint` carrying `data`.
    ///
    /// # Errors
    ///
    /// See [`Client::build_request`].
    pub fn post(&mut self, endpoint: &str, data: &Value) -> Result<&mut Self, HttpError> {
        self.build_request(endpoint, HttpMethod::Post, data, &Value::Null)
    }

    /// Prepares a PUT request for `endpoint` carrying `data`.
    ///
    /// # Errors
    ///
    /// See [`Client::build_request`].
    pub fn put(&mut self, endpoint: &str, data: &Value) -> Result<&mut Self, HttpError> {
        self.build_request(endpoint, HttpMethod::Put, data, &Value::Null)
    }

    /// Prepares a PATCH request for `endpoint` carrying `data`.
    ///
    /// # Errors
    ///
    /// See [`Client::build_request`].
    pub fn patch(&mut self, endpoint: &str, data: &Value) -> Result<&mut Self, HttpError> {
        self.build_request(endpoint, HttpMethod::Patch, data, &Value::Null)
    }

    /// Prepares a DELETE request for `endpoint`.
    ///
    /// Pass `&Value::Null` to send no body.
    ///
    /// # Errors
    ///
    /// See [`Client::build_request`].
    pub fn delete(&mut self, endpoint: &str, data: &Value) -> Result<&mut Self, HttpError> {
        self.build_request(endpoint, HttpMethod::Delete, data, &Value::Null)
    }

    /// Sends the pending request and returns the raw response.
    ///
    /// The request stays available through [`Client::request`] afterwards.
    ///
    /// # Errors
    ///
    /// - [`HttpError::NoPendingRequest`] if no request has been built
    /// - [`HttpError::Connection`] if the server cannot be reached
    /// - [`HttpError::BadResponse`] if the server answers with a 5xx status
    /// - [`HttpError::Transport`] for any other transport failure
    pub fn send(&mut self) -> Result<&HttpResponse, HttpError> {
        let request = self.request.as_ref().ok_or(HttpError::NoPendingRequest)?;

        tracing::debug!(method = %request.method(), url = %request.url(), "Sending TalentCards request");

        let response = self.transport.send(request).map_err(|error| {
            tracing::warn!(url = %request.url(), %error, "TalentCards request failed");
            HttpError::from(error)
        })?;

        tracing::debug!(status = response.code, "Received TalentCards response");

        let code = response.code;
        let response = self.response.insert(response);

        if response.is_server_error() {
            tracing::warn!(status = code, "TalentCards API returned a server error");
            return Err(HttpError::BadResponse { code });
        }

        Ok(response)
    }

    /// Sends the pending request and returns the body in `format`.
    ///
    /// # Errors
    ///
    /// Everything [`Client::send`] returns, plus [`HttpError::Decode`] when
    /// `format` is [`ResponseFormat::Json`] and a 2xx body is not JSON. A
    /// non-JSON body with any other status is returned as a JSON string.
    pub fn response_as(&mut self, format: ResponseFormat) -> Result<ResponseBody, HttpError> {
        let response = self.send()?;
        match format {
            ResponseFormat::Json => response.json().map(ResponseBody::Json),
            ResponseFormat::Text => Ok(ResponseBody::Text(response.body.clone())),
        }
    }

    /// Sends the pending request and decodes the body as JSON.
    ///
    /// An empty body decodes to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// See [`Client::response_as`].
    pub fn response(&mut self) -> Result<Value, HttpError> {
        self.send()?.json()
    }

    /// Sends the pending request and returns the body text untouched.
    ///
    /// # Errors
    ///
    /// See [`Client::send`].
    pub fn response_text(&mut self) -> Result<String, HttpError> {
        Ok(self.send()?.body.clone())
    }

    /// Returns the last built request.
    #[must_use]
    pub const fn request(&self) -> Option<&HttpRequest> {
        self.request.as_ref()
    }

    /// Returns the status code of the last response received.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.response.as_ref().map(|response| response.code)
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::TransportError;
    use crate::clients::testing::QueuedTransport;
    use crate::config::DEFAULT_BASE_URL;
    use serde_json::json;

    fn create_client(transport: &QueuedTransport) -> Client {
        let config = TalentCardsConfig::builder()
            .api_key(ApiKey::new("VALID").unwrap())
            .build()
            .unwrap();
        Client::with_transport(&config, transport.clone())
    }

    fn mock_response(code: u16, body: &str) -> (QueuedTransport, Client) {
        let transport = QueuedTransport::new();
        transport.push_response(HttpResponse::new(code, body));
        let client = create_client(&transport);
        (transport, client)
    }

    #[test]
    fn test_it_validates_urls() {
        let (transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);
        client.set_url("INVALID");

        let result = client.get("/", &json!({}));

        assert!(matches!(result, Err(HttpError::InvalidEndpoint { .. })));
        assert!(transport.requests().is_empty());
        assert!(client.request().is_none());
    }

    #[test]
    fn test_get_request_has_get_method() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        client.get("/", &json!({"foo": "bar"})).unwrap().response().unwrap();

        assert_eq!(client.request().unwrap().method(), HttpMethod::Get);
        assert!(client.request().unwrap().body().is_none());
    }

    #[test]
    fn test_post_request_has_post_method() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        client.post("/", &json!({})).unwrap().response().unwrap();

        assert_eq!(client.request().unwrap().method(), HttpMethod::Post);
    }

    #[test]
    fn test_put_request_has_put_method() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        client.put("/", &json!({"foo": "bar"})).unwrap().response().unwrap();

        let request = client.request().unwrap();
        assert_eq!(request.method(), HttpMethod::Put);
        assert_eq!(request.body(), Some(r#"{"foo":"bar"}"#));
    }

    #[test]
    fn test_patch_request_has_patch_method() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        client.patch("/", &json!({})).unwrap().response().unwrap();

        assert_eq!(client.request().unwrap().method(), HttpMethod::Patch);
    }

    #[test]
    fn test_delete_request_has_delete_method() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        client.delete("/", &Value::Null).unwrap().response().unwrap();

        let request = client.request().unwrap();
        assert_eq!(request.method(), HttpMethod::Delete);
        assert!(request.body().is_none());
    }

    #[test]
    fn test_delete_request_can_carry_a_body() {
        let (_transport, mut client) = mock_response(204, "");

        let body = client
            .delete("/sets", &json!({"data": [{"id": 1}]}))
            .unwrap()
            .response()
            .unwrap();

        assert_eq!(body, Value::Null);
        assert_eq!(
            client.request().unwrap().body(),
            Some(r#"{"data":[{"id":1}]}"#)
        );
    }

    #[test]
    fn test_response_decodes_json() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        let response = client.get("/", &json!({})).unwrap().response().unwrap();

        assert_eq!(response, json!({"foo": "bar"}));
    }

    #[test]
    fn test_response_text_returns_raw_body() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);

        let response = client.get("/", &json!({})).unwrap().response_text().unwrap();

        assert_eq!(response, r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_response_as_honours_format() {
        let transport = QueuedTransport::new();
        transport.push_response(HttpResponse::new(200, r#"{"foo":"bar"}"#));
        transport.push_response(HttpResponse::new(200, r#"{"foo":"bar"}"#));
        let mut client = create_client(&transport);

        let decoded = client
            .get("/", &json!({}))
            .unwrap()
            .response_as(ResponseFormat::Json)
            .unwrap();
        let raw = client.response_as(ResponseFormat::Text).unwrap();

        assert_eq!(decoded, ResponseBody::Json(json!({"foo": "bar"})));
        assert_eq!(raw, ResponseBody::Text(r#"{"foo":"bar"}"#.to_string()));
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn test_status_code_is_exposed() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);
        assert!(client.status_code().is_none());

        let response = client.get("/", &json!({})).unwrap().response().unwrap();

        assert_eq!(client.status_code(), Some(200));
        assert!(response.get("foo").is_some());
    }

    #[test]
    fn test_client_errors_pass_through_as_data() {
        let (_transport, mut client) = mock_response(404, r#"{"errors":[{"status":"404"}]}"#);

        let response = client.get("/users/1", &json!({})).unwrap().response().unwrap();

        assert_eq!(client.status_code(), Some(404));
        assert_eq!(response["errors"][0]["status"], "404");
    }

    #[test]
    fn test_plain_text_unauthorized_is_not_an_error() {
        let (_transport, mut client) = mock_response(401, "Unauthorized");

        let response = client.get("/me", &json!({})).unwrap().response().unwrap();

        assert_eq!(client.status_code(), Some(401));
        assert_eq!(response, Value::String("Unauthorized".to_string()));
    }

    #[test]
    fn test_headers_carry_media_type_and_bearer_token() {
        let (_transport, client) = mock_response(200, "{}");

        let headers = client.headers();

        assert!(headers.contains(&("Authorization".to_string(), "Bearer VALID".to_string())));
        assert!(headers.contains(&("Accept".to_string(), "application/vnd.api+json".to_string())));
        assert!(headers.contains(&(
            "Content-Type".to_string(),
            "application/vnd.api+json".to_string()
        )));
    }

    #[test]
    fn test_headers_are_idempotent() {
        let (_transport, client) = mock_response(200, "{}");
        assert_eq!(client.headers(), client.headers());
    }

    #[test]
    fn test_set_key_changes_authorization_header() {
        let (_transport, mut client) = mock_response(200, "{}");

        client.set_key(ApiKey::new("ROTATED").unwrap());
        client.get("/", &json!({})).unwrap();

        assert_eq!(
            client.request().unwrap().header("Authorization"),
            Some("Bearer ROTATED")
        );
    }

    #[test]
    fn test_server_error_is_bad_response() {
        let (_transport, mut client) = mock_response(500, "");

        let result = client.get("/", &json!({})).unwrap().response();

        match result {
            Err(error @ HttpError::BadResponse { code: 500 }) => assert_eq!(
                error.to_string(),
                "The TalentCards API is experiencing some issues."
            ),
            other => panic!("Expected BadResponse, got: {other:?}"),
        }
        assert_eq!(client.status_code(), Some(500));
    }

    #[test]
    fn test_connection_failure_is_connection_error() {
        let transport = QueuedTransport::new();
        transport.push_error(TransportError::Connect(
            "Error Communicating with Server".to_string(),
        ));
        let mut client = create_client(&transport);

        let result = client.get("/", &json!({})).unwrap().response();

        match result {
            Err(error @ HttpError::Connection) => assert_eq!(
                error.to_string(),
                "Could not connect to the TalentCards server. Please check your internet connectivity and try again later."
            ),
            other => panic!("Expected Connection, got: {other:?}"),
        }
        assert!(client.status_code().is_none());
    }

    #[test]
    fn test_response_without_request_fails() {
        let (_transport, mut client) = mock_response(200, "{}");
        assert!(matches!(client.response(), Err(HttpError::NoPendingRequest)));
    }

    #[test]
    fn test_build_url_with_empty_query_string() {
        let (_transport, mut client) = mock_response(200, r#"{"foo":"bar"}"#);
        client.get("/test", &json!({})).unwrap().response().unwrap();

        let url = client.build_url("/test", "").unwrap();

        assert_eq!(url, format!("{}/test", client.url()));
        assert_eq!(client.request().unwrap().url(), url);
    }

    #[test]
    fn test_build_url_with_non_empty_query_string() {
        let (_transport, client) = mock_response(200, r#"{"foo":"bar"}"#);
        let query_params = json!({
            "sort": ["-email"],
            "filter": {"first-name": "John"},
            "fields": {"users": ["*"]},
        });

        let url = client
            .build_url("/test", &client.build_query(&query_params))
            .unwrap();

        let expected = format!(
            "{}/test?{}",
            client.url(),
            urlencoding::encode("sort=-email&filter[first-name]=John&fields[users]=*")
        );
        assert_eq!(url, expected);
    }

    #[test]
    fn test_get_appends_query_to_request_url() {
        let (_transport, mut client) = mock_response(200, "{}");

        client.get("/users", &json!({"sort": ["-email"]})).unwrap();

        assert_eq!(
            client.request().unwrap().url(),
            format!("{DEFAULT_BASE_URL}/users?sort%3D-email")
        );
    }

    #[test]
    fn test_get_with_only_ignored_parameters_has_no_question_mark() {
        let (_transport, mut client) = mock_response(200, "{}");

        client.get("/users", &json!({"page": 2})).unwrap();

        assert_eq!(
            client.request().unwrap().url(),
            format!("{DEFAULT_BASE_URL}/users")
        );
    }

    #[test]
    fn test_last_build_wins() {
        let (transport, mut client) = mock_response(200, "{}");

        client.get("/users", &json!({})).unwrap();
        client.get("/groups", &json!({})).unwrap().response().unwrap();

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url(), format!("{DEFAULT_BASE_URL}/groups"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_debug_output_masks_key() {
        let (_transport, client) = mock_response(200, "{}");
        let debug = format!("{client:?}");
        assert!(debug.contains("ApiKey(*****)"));
        assert!(!debug.contains("VALID"));
    }
}
