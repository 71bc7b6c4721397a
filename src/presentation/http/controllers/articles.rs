// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    error::ApplicationError,
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::{HeaderMap, HeaderValue, StatusCode},
};
use serde::Deserialize;

pub const NEXT_CURSOR_HEADER: &str = "x-next-cursor";

#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Creation payload. Server-assigned fields (`id`, `createdAt`, `updatedAt`)
/// are not part of the type and are dropped if a client sends them.
#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> HttpResult<(HeaderMap, Json<Vec<ArticleDto>>)> {
    tracing::debug!(?params, "listing articles");
    let page = state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()?;

    let mut headers = HeaderMap::new();
    if let Some(cursor) = page.next_cursor.as_deref() {
        let value = HeaderValue::from_str(cursor)
            .map_err(|err| HttpError::from_error(ApplicationError::unexpected(err.to_string())))?;
        headers.insert(NEXT_CURSOR_HEADER, value);
    }

    Ok((headers, Json(page.items)))
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

/// `PUT`/`DELETE` on the collection path: the article id is missing.
pub async fn missing_article_id() -> HttpError {
    HttpError::from_error(ApplicationError::validation("article id is required"))
}
