#![allow(dead_code)]

use alias_shortener::config::Credentials;
use alias_shortener::domain::repositories::{StoreError, UrlRepository};
use alias_shortener::infrastructure::persistence::{InMemoryUrlRepository, PgUrlRepository};
use alias_shortener::routes::app_router;
use alias_shortener::state::AppState;
use alias_shortener::utils::alias_generator::AliasGenerator;
use alias_shortener::utils::alias_validator::DEFAULT_ALIAS_LENGTH;
use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

pub const ALIAS: &str = "myalias12345678901ab";

/// `admin:secret`
pub const GOOD_BASIC: &str = "Basic YWRtaW46c2VjcmV0";
/// `admin:wrong`
pub const BAD_BASIC: &str = "Basic YWRtaW46d3Jvbmc=";

/// Store whose every call fails with a backend error.
pub struct FailingRepository;

#[async_trait]
impl UrlRepository for FailingRepository {
    async fn save(&self, _url: &str, _alias: &str) -> Result<i64, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn resolve(&self, _alias: &str) -> Result<String, StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn delete(&self, _alias: &str) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Backend("connection refused".to_string()))
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        user: "admin".to_string(),
        password: "secret".to_string(),
    }
}

pub fn create_test_state(
    repository: Arc<dyn UrlRepository>,
    credentials: Option<Credentials>,
) -> AppState {
    AppState::new(
        repository,
        AliasGenerator::seeded(42),
        DEFAULT_ALIAS_LENGTH,
        credentials,
    )
}

/// Full router over a fresh in-memory store, no auth.
pub fn memory_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = create_test_state(repository.clone(), None);
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repository)
}

/// Full router over a fresh in-memory store with a custom alias length.
pub fn memory_server_with_length(alias_length: usize) -> (TestServer, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = AppState::new(
        repository.clone(),
        AliasGenerator::seeded(42),
        alias_length,
        None,
    );
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repository)
}

/// Full router over a fresh in-memory store with Basic auth enabled.
pub fn protected_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let state = create_test_state(repository.clone(), Some(credentials()));
    let server = TestServer::new(app_router(state)).unwrap();

    (server, repository)
}

/// Full router over a store that always fails.
pub fn failing_server() -> TestServer {
    let state = create_test_state(Arc::new(FailingRepository), None);
    TestServer::new(app_router(state)).unwrap()
}

/// Full router over PostgreSQL.
pub fn pg_server(pool: PgPool) -> TestServer {
    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let state = create_test_state(repository, None);
    TestServer::new(app_router(state)).unwrap()
}

pub fn auth_header(value: &'static str) -> (HeaderName, HeaderValue) {
    (header::AUTHORIZATION, HeaderValue::from_static(value))
}

pub async fn insert_url(pool: &PgPool, alias: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("INSERT INTO urls (alias, url) VALUES ($1, $2) RETURNING id")
        .bind(alias)
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
