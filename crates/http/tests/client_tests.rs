//! Integration tests for the Campus HTTP client

use campus_http::{
    AuthCampusClient, CampusClientBuilder, ClientError, MemoryTokenStore, TokenStore,
};
use reqwest::Method;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_with(server: &MockServer, store: Arc<MemoryTokenStore>) -> AuthCampusClient {
    CampusClientBuilder::new()
        .base_url(server.uri())
        .build_authenticated(store)
        .expect("client should build")
}

fn success_envelope(value: Value) -> Value {
    json!({ "isSuccess": true, "value": value, "error": null })
}

fn refresh_envelope(access_token: &str) -> Value {
    success_envelope(json!({ "accessToken": access_token }))
}

/// Matches requests that carry no Authorization header at all.
struct NoAuthorizationHeader;

impl wiremock::Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

#[tokio::test]
async fn builder_requires_base_url() {
    let result = CampusClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn persisted_token_is_sent_as_bearer_credential() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(header("authorization", "Bearer valid-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("valid-token", "refresh-1"));
    let client = client_with(&mock_server, store);

    let courses: Vec<Value> = client
        .execute(client.request(Method::GET, "/courses"))
        .await
        .unwrap();
    assert!(courses.is_empty());
}

#[tokio::test]
async fn absent_token_means_no_authorization_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/category"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    let client = client_with(&mock_server, store);

    let categories: Vec<Value> = client
        .execute(client.request(Method::GET, "/category"))
        .await
        .unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn expired_token_triggers_one_refresh_and_one_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refresh_envelope("fresh")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "id": "u1",
            "email": "ada@example.com",
            "fullName": "Ada Lovelace",
            "roles": ["Student"],
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "refresh-1"));
    let client = client_with(&mock_server, Arc::clone(&store));

    let profile = client.profile().await.unwrap();
    assert_eq!(profile.email, "ada@example.com");

    // Access token rotated, refresh token untouched.
    assert_eq!(store.access_token().as_deref(), Some("fresh"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn retried_request_does_not_start_a_second_refresh_cycle() {
    let mock_server = MockServer::start().await;

    // The server rejects even the refreshed token.
    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refresh_envelope("fresh")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "refresh-1"));
    let client = client_with(&mock_server, store);

    let result = client.profile().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn missing_refresh_token_fails_without_a_refresh_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refresh_envelope("fresh")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::new());
    store.set_access_token("stale");
    let client = client_with(&mock_server, store);

    let result = client.profile().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn failed_refresh_propagates_original_failure_and_leaves_storage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/profile"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "refresh-1"));
    let client = client_with(&mock_server, Arc::clone(&store));

    let result = client.profile().await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));

    assert_eq!(store.access_token().as_deref(), Some("stale"));
    assert_eq!(store.refresh_token().as_deref(), Some("refresh-1"));
}

#[tokio::test]
async fn concurrent_401s_share_a_single_refresh() {
    let mock_server = MockServer::start().await;

    // Delay the 401s so both requests are in flight before either starts
    // the refresh exchange.
    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(
            ResponseTemplate::new(401).set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/instructors"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(
            ResponseTemplate::new(401).set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refresh_envelope("fresh")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/instructors"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!([]))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("stale", "refresh-1"));
    let client = client_with(&mock_server, store);

    let (courses, instructors) = tokio::join!(
        client.execute::<Vec<Value>>(client.request(Method::GET, "/courses")),
        client.execute::<Vec<Value>>(client.request(Method::GET, "/instructors")),
    );
    assert!(courses.is_ok());
    assert!(instructors.is_ok());
}

#[tokio::test]
async fn deadline_failure_is_a_timeout_not_an_auth_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(json!([])))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(refresh_envelope("fresh")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemoryTokenStore::with_tokens("valid-token", "refresh-1"));
    let client = client_with(&mock_server, store);

    let request =
        client.request_with_deadline(Method::GET, "/courses", Duration::from_millis(100));
    let result: Result<Vec<Value>, _> = client.execute(request).await;
    assert!(matches!(result, Err(ClientError::Timeout)));
}

#[tokio::test]
async fn business_error_in_envelope_surfaces_its_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "isSuccess": false,
            "value": null,
            "error": { "statusCode": 400, "message": "Invalid credentials" },
        })))
        .mount(&mock_server)
        .await;

    let client = CampusClientBuilder::new()
        .base_url(mock_server.uri())
        .build_public()
        .unwrap();

    let result = client
        .login(&campus_core::types::LoginRequest {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        })
        .await;

    match result {
        Err(ClientError::Api(body)) => assert_eq!(body.message, "Invalid credentials"),
        other => panic!("expected envelope error, got {other:?}"),
    }
}
