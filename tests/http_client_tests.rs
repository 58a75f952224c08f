//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building,
//! response parsing, and error handling behavior.

use serde_json::json;
use std::collections::HashMap;
use webflow_api::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use webflow_api::{ApiToken, HostUrl, HttpError, InvalidHttpRequestError, WebflowConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the mock server.
fn create_client(server: &MockServer) -> HttpClient {
    let config = WebflowConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("TestApp/1.0")
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

// ============================================================================
// Verb helpers
// ============================================================================

#[tokio::test]
async fn test_get_returns_response_envelope() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("GET"))
        .and(path("/sites/site1/users"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-ratelimit-limit", "60")
                .insert_header("x-ratelimit-remaining", "59")
                .set_body_json(json!({"users": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut query = HashMap::new();
    query.insert("limit".to_string(), "5".to_string());
    let response = client.get("/sites/site1/users", Some(query)).await.unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.status_text, "OK");
    assert_eq!(response.body, json!({"users": []}));

    let config = response.config.as_ref().unwrap();
    assert_eq!(config.method, HttpMethod::Get);
    assert!(config.url.ends_with("/sites/site1/users"));

    let rate_limit = response.rate_limit.unwrap();
    assert_eq!(rate_limit.limit, 60);
    assert_eq!(rate_limit.remaining, 59);
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("POST"))
        .and(path("/sites/site1/users/invite"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"email": "some@one.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"_id": "u1"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .post("/sites/site1/users/invite", json!({"email": "some@one.com"}))
        .await
        .unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.status_text, "Created");
    assert_eq!(response.body["_id"], "u1");
}

#[tokio::test]
async fn test_patch_sends_json_body() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("PATCH"))
        .and(path("/sites/site1/users/u1"))
        .and(body_json(json!({"emailVerified": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "u1", "data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .patch("/sites/site1/users/u1", json!({"emailVerified": true}))
        .await
        .unwrap();

    assert_eq!(response.config.unwrap().method, HttpMethod::Patch);
}

#[tokio::test]
async fn test_delete_with_empty_body_yields_empty_object() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("DELETE"))
        .and(path("/sites/site1/users/u1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.delete("/sites/site1/users/u1").await.unwrap();

    assert_eq!(response.code, 204);
    assert_eq!(response.body, json!({}));
}

// ============================================================================
// Headers
// ============================================================================

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("GET"))
        .and(path("/sites/site1/accessgroups"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header("accept-version", "1.0.0"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"accessGroups": []})))
        .expect(1)
        .mount(&server)
        .await;

    client.get("/sites/site1/accessgroups", None).await.unwrap();

    let user_agent = client.default_headers().get("User-Agent").unwrap();
    assert!(user_agent.starts_with("TestApp/1.0 | Webflow API Library v"));
}

#[tokio::test]
async fn test_extra_headers_are_sent() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("GET"))
        .and(path("/sites/site1/users"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": []})))
        .expect(1)
        .mount(&server)
        .await;

    let request = HttpRequest::builder(HttpMethod::Get, "/sites/site1/users")
        .header("x-trace", "abc")
        .build()
        .unwrap();

    client.request(request).await.unwrap();
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_returned_once() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("GET"))
        .and(path("/sites/site1/users"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-request-id", "req-429")
                .set_body_json(json!({"msg": "Too many requests", "code": 429})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client.get("/sites/site1/users", None).await.unwrap_err();

    assert_eq!(error.status(), Some(429));
    match error {
        HttpError::Response(response) => {
            assert!(response.message.contains("Too many requests"));
            assert!(response.message.contains("req-429"));
            assert_eq!(response.error_reference.as_deref(), Some("req-429"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    Mock::given(method("GET"))
        .and(path("/sites/site1/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.get("/sites/site1/users", None).await.unwrap_err();

    assert_eq!(error.status(), Some(502));
    assert!(error.to_string().contains("Bad Gateway"));
}

#[tokio::test]
async fn test_network_failure_is_a_network_error() {
    let config = WebflowConfig::builder()
        .api_token(ApiToken::new("test-token").unwrap())
        .host(HostUrl::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();

    let error = client.get("/sites/site1/users", None).await.unwrap_err();

    assert!(matches!(error, HttpError::Network(_)));
    assert!(error.status().is_none());
}

#[tokio::test]
async fn test_invalid_request_is_rejected_before_sending() {
    let server = MockServer::start().await;
    let client = create_client(&server);

    // Body without body_type
    let request = HttpRequest {
        http_method: HttpMethod::Patch,
        path: "/sites/site1/users/u1".to_string(),
        body: Some(json!({"emailVerified": true})),
        body_type: None,
        query: None,
        extra_headers: None,
    };

    let error = client.request(request).await.unwrap_err();
    assert!(matches!(
        error,
        HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType)
    ));

    // POST without body
    let result = HttpRequest::builder(HttpMethod::Post, "/sites/site1/users/invite").build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));

    let request = HttpRequest::builder(HttpMethod::Post, "/sites/site1/users/invite")
        .body(json!({}))
        .body_type(DataType::Json)
        .build();
    assert!(request.is_ok());
}
