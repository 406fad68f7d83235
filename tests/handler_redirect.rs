mod common;

use alias_shortener::domain::repositories::UrlRepository;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::memory_server();
    repo.save("https://example.com", common::ALIAS).await.unwrap();

    let response = server.get(&format!("/{}", common::ALIAS)).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_save_then_redirect() {
    let (server, _repo) = common::memory_server();

    let body = server
        .post("/url")
        .json(&json!({ "url": "https://rust-lang.org/learn" }))
        .await
        .json::<serde_json::Value>();
    let alias = body["alias"].as_str().unwrap();

    let response = server.get(&format!("/{alias}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://rust-lang.org/learn");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, _repo) = common::memory_server();

    let response = server.get("/neverSavedAlias12345").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_without_alias_is_bad_request() {
    let (server, _repo) = common::memory_server();

    let response = server.get("/").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_redirect_store_failure() {
    let server = common::failing_server();

    let response = server.get(&format!("/{}", common::ALIAS)).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_redirect_is_public_when_auth_enabled() {
    let (server, repo) = common::protected_server();
    repo.save("https://example.com", common::ALIAS).await.unwrap();

    let response = server.get(&format!("/{}", common::ALIAS)).await;

    response.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (server, _repo) = common::memory_server();

    let response = server.get("/neverSavedAlias12345").await;

    assert!(!response.header("x-request-id").is_empty());
}

#[tokio::test]
async fn test_client_request_id_is_echoed() {
    let (server, _repo) = common::memory_server();

    let response = server
        .get("/neverSavedAlias12345")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static("req-123"),
        )
        .await;

    assert_eq!(response.header("x-request-id"), "req-123");
}
