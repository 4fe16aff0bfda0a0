//! Integration tests for the HTTP client against a local mock server.
//!
//! The client is blocking, so every exchange runs inside
//! `tokio::task::spawn_blocking` while the mock server is driven by the
//! test runtime.

use std::time::Duration;

use serde_json::{json, Value};
use talentcards_api::clients::MEDIA_TYPE;
use talentcards_api::{
    ApiKey, Client, HttpError, HttpMethod, ResponseBody, ResponseFormat, TalentCardsConfig,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at `base_url` with the given key.
fn create_client(base_url: &str, key: &str) -> Client {
    let config = TalentCardsConfig::builder()
        .api_key(ApiKey::new(key).unwrap())
        .base_url(base_url)
        .build()
        .unwrap();
    Client::new(&config)
}

/// Runs `f` on a blocking thread and returns its output.
async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_get_sends_fixed_headers_and_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Accept", MEDIA_TYPE))
        .and(header("Content-Type", MEDIA_TYPE))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"type": "users"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let (result, status) = blocking(move || {
        let mut client = create_client(&uri, "test-key");
        let result = client.get("/me", &json!({})).and_then(Client::response);
        (result, client.status_code())
    })
    .await;

    assert_eq!(result.unwrap(), json!({"data": {"type": "users"}}));
    assert_eq!(status, Some(200));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_query_string_is_encoded_as_a_whole() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let mut client = create_client(&uri, "test-key");
        client
            .get(
                "/users",
                &json!({
                    "sort": ["-email"],
                    "filter": {"first-name": "John"},
                    "fields": {"users": ["*"]}
                }),
            )
            .and_then(Client::response)
            .unwrap();
    })
    .await;

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(
        received[0].url.query(),
        Some("sort%3D-email%26filter%5Bfirst-name%5D%3DJohn%26fields%5Busers%5D%3D%2A")
    );
    assert!(received[0].body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_write_verbs_send_json_bodies() {
    let server = MockServer::start().await;
    let payload = json!({"data": {"type": "users", "attributes": {"email": "a@b.c"}}});
    for verb in ["POST", "PUT", "PATCH"] {
        Mock::given(method(verb))
            .and(path("/users/1"))
            .and(body_json(payload.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": verb})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let uri = server.uri();
    let responses = blocking(move || {
        let mut client = create_client(&uri, "test-key");
        vec![
            client.post("/users/1", &payload).and_then(Client::response).unwrap(),
            client.put("/users/1", &payload).and_then(Client::response).unwrap(),
            client.patch("/users/1", &payload).and_then(Client::response).unwrap(),
        ]
    })
    .await;

    assert_eq!(
        responses,
        vec![json!({"ok": "POST"}), json!({"ok": "PUT"}), json!({"ok": "PATCH"})]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_without_body_and_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let (result, pending_method) = blocking(move || {
        let mut client = create_client(&uri, "test-key");
        let result = client.delete("/users/9", &Value::Null).and_then(Client::response);
        (result, client.request().map(talentcards_api::HttpRequest::method))
    })
    .await;

    assert_eq!(result.unwrap(), Value::Null);
    assert_eq!(pending_method, Some(HttpMethod::Delete));
    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_text_response_format_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text"))
        .mount(&server)
        .await;

    let uri = server.uri();
    let body = blocking(move || {
        let mut client = create_client(&uri, "test-key");
        client
            .get("/", &json!({}))
            .and_then(|client| client.response_as(ResponseFormat::Text))
            .unwrap()
    })
    .await;

    assert_eq!(body, ResponseBody::Text("plain text".to_string()));
}

// ============================================================================
// Status handling
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_client_errors_are_returned_as_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/0"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"errors": [{"status": "404"}]})),
        )
        .mount(&server)
        .await;

    let uri = server.uri();
    let (result, status) = blocking(move || {
        let mut client = create_client(&uri, "test-key");
        let result = client.get("/users/0", &json!({})).and_then(Client::response);
        (result, client.status_code())
    })
    .await;

    assert_eq!(result.unwrap()["errors"][0]["status"], "404");
    assert_eq!(status, Some(404));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_server_errors_become_bad_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let uri = server.uri();
    let (result, status) = blocking(move || {
        let mut client = create_client(&uri, "test-key");
        let result = client.get("/users", &json!({})).and_then(Client::response);
        (result, client.status_code())
    })
    .await;

    match result {
        Err(error @ HttpError::BadResponse { code: 503 }) => assert_eq!(
            error.to_string(),
            "The TalentCards API is experiencing some issues."
        ),
        other => panic!("Expected BadResponse, got: {other:?}"),
    }
    assert_eq!(status, Some(503));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_timeout_is_reported_as_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let uri = server.uri();
    let result = blocking(move || {
        let config = TalentCardsConfig::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .base_url(uri)
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let mut client = Client::new(&config);
        client.get("/me", &json!({})).and_then(Client::response)
    })
    .await;

    assert!(matches!(result, Err(HttpError::Connection)));
}

#[test]
fn test_unreachable_server_is_connection_error() {
    let mut client = create_client("http://127.0.0.1:1", "test-key");

    let result = client.get("/me", &json!({})).and_then(Client::response);

    match result {
        Err(error @ HttpError::Connection) => assert!(error
            .to_string()
            .starts_with("Could not connect to the TalentCards server.")),
        other => panic!("Expected Connection, got: {other:?}"),
    }
    assert_eq!(client.status_code(), None);
}

#[test]
fn test_invalid_base_url_fails_before_sending() {
    let mut client = create_client("INVALID", "test-key");

    let result = client.get("/", &json!({}));

    match result {
        Err(error @ HttpError::InvalidEndpoint { .. }) => {
            assert_eq!(error.to_string(), "Error invalid endpoint provided");
        }
        other => panic!("Expected InvalidEndpoint, got: {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_set_key_changes_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("Authorization", "Bearer second-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    blocking(move || {
        let mut client = create_client(&uri, "first-key");
        client.set_key(ApiKey::new("second-key").unwrap());
        client.get("/me", &json!({})).and_then(Client::response).unwrap();
    })
    .await;
}
