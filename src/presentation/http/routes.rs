// src/presentation/http/routes.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::controllers::articles;
use crate::presentation::http::error::{HttpError, panic_response};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::{HeaderName, HeaderValue, Method, Uri},
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Router allowing any CORS origin.
pub fn build_router(state: HttpState) -> Router {
    build_router_with_origins(state, &[])
}

/// Router restricted to `allowed_origins`. An empty list allows any origin.
pub fn build_router_with_origins(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(article_routes())
        .nest("/api", article_routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(Extension(state))
}

/// Article endpoints, served both at the root and under `/api`.
fn article_routes() -> Router {
    Router::new()
        .route(
            "/articles",
            get(articles::list_articles)
                .post(articles::create_article)
                .put(articles::missing_article_id)
                .delete(articles::missing_article_id),
        )
        .route(
            "/articles/",
            put(articles::missing_article_id).delete(articles::missing_article_id),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .method_not_allowed_fallback(method_not_allowed)
}

async fn route_not_found(uri: Uri) -> HttpError {
    HttpError::from_error(ApplicationError::not_found(format!(
        "no route for {}",
        uri.path()
    )))
}

async fn method_not_allowed(method: Method) -> HttpError {
    HttpError::method_not_allowed(&method)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(articles::NEXT_CURSOR_HEADER)])
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
