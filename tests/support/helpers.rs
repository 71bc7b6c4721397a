// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use knowledgebase::application::{
    ports::{id::IdGenerator, time::Clock},
    services::ApplicationServices,
};
use knowledgebase::domain::article::ArticleRepository;
use knowledgebase::infrastructure::repositories::InMemoryArticleRepository;
use knowledgebase::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

pub fn build_services(repo: Arc<dyn ArticleRepository>) -> ApplicationServices {
    build_services_with_clock(repo, Arc::new(mocks::FixedClock))
}

pub fn build_services_with_clock(
    repo: Arc<dyn ArticleRepository>,
    clock: Arc<dyn Clock>,
) -> ApplicationServices {
    let ids: Arc<dyn IdGenerator> = Arc::new(mocks::SequentialIds::default());
    ApplicationServices::new(repo, clock, ids)
}

pub fn build_test_state(repo: Arc<dyn ArticleRepository>) -> HttpState {
    HttpState {
        services: Arc::new(build_services(repo)),
    }
}

/// Router over an in-memory store whose id generator is `ids`.
pub fn make_test_router_with_ids(ids: Arc<dyn IdGenerator>) -> axum::Router {
    let repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock);
    build_router(HttpState {
        services: Arc::new(ApplicationServices::new(repo, clock, ids)),
    })
}

/// Router over an empty in-memory store.
pub fn make_test_router() -> axum::Router {
    make_test_router_with_repo(Arc::new(InMemoryArticleRepository::new()))
}

pub fn make_test_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    build_router(build_test_state(repo))
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert a kind-tagged JSON error body with the expected status and kind,
/// and return the body for further checks.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_kind: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = read_json(resp).await;
    let kind = json.get("error").and_then(Value::as_str).unwrap_or("");
    let message = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(kind, expected_kind, "unexpected error kind: {json}");
    assert!(!message.is_empty(), "expected non-empty message in {json}");
    json
}
