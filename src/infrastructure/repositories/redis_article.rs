// src/infrastructure/repositories/redis_article.rs
use super::{invalid_stored, map_redis, map_redis_pool};
use crate::domain::article::{Article, ArticleContent, ArticleId, ArticleRepository, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::timestamp::{format_timestamp, parse_timestamp};
use async_trait::async_trait;
use deadpool_redis::{Connection, Pool};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

const INDEX_KEY: &str = "articles";

fn document_key(id: &ArticleId) -> String {
    format!("article:{id}")
}

/// Schemaless article store: one JSON document per article plus a set of ids.
#[derive(Clone)]
pub struct RedisArticleRepository {
    pool: Pool,
}

impl RedisArticleRepository {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> DomainResult<Connection> {
        self.pool.get().await.map_err(map_redis_pool)
    }
}

/// Stored shape. Timestamps stay textual so that documents written by older
/// clients in other layouts still load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleDocument {
    id: String,
    title: String,
    content: String,
    #[serde(alias = "created_at")]
    created_at: String,
    #[serde(alias = "updated_at")]
    updated_at: String,
}

impl From<&Article> for ArticleDocument {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.to_string(),
            title: article.title.to_string(),
            content: article.content.to_string(),
            created_at: format_timestamp(&article.created_at),
            updated_at: format_timestamp(&article.updated_at),
        }
    }
}

impl TryFrom<ArticleDocument> for Article {
    type Error = DomainError;

    fn try_from(doc: ArticleDocument) -> Result<Self, Self::Error> {
        let created_at = parse_timestamp(&doc.created_at)
            .map_err(|err| DomainError::Persistence(format!("article {}: {err}", doc.id)))?;
        let updated_at = parse_timestamp(&doc.updated_at)
            .map_err(|err| DomainError::Persistence(format!("article {}: {err}", doc.id)))?;

        Ok(Article {
            id: ArticleId::new(doc.id).map_err(invalid_stored)?,
            title: ArticleTitle::new(doc.title).map_err(invalid_stored)?,
            content: ArticleContent::new(doc.content).map_err(invalid_stored)?,
            created_at,
            updated_at,
        })
    }
}

fn decode(raw: &str) -> DomainResult<Article> {
    let doc: ArticleDocument = serde_json::from_str(raw)
        .map_err(|err| DomainError::Persistence(format!("malformed article document: {err}")))?;
    Article::try_from(doc)
}

fn encode(article: &Article) -> DomainResult<String> {
    serde_json::to_string(&ArticleDocument::from(article))
        .map_err(|err| DomainError::Persistence(format!("failed to encode article: {err}")))
}

#[async_trait]
impl ArticleRepository for RedisArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let mut conn = self.connection().await?;

        let ids: Vec<String> = conn.smembers(INDEX_KEY).await.map_err(map_redis)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let keys = ids
            .into_iter()
            .map(|id| {
                ArticleId::new(id)
                    .map(|id| document_key(&id))
                    .map_err(invalid_stored)
            })
            .collect::<DomainResult<Vec<String>>>()?;
        // MGET always replies with an array, even for a single key.
        let documents: Vec<Option<String>> = redis::cmd("MGET")
            .arg(&keys)
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        // Ids whose document has vanished are skipped rather than failing the scan.
        documents.iter().flatten().map(|raw| decode(raw)).collect()
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.connection().await?;
        let raw: Option<String> = conn.get(document_key(id)).await.map_err(map_redis)?;
        raw.as_deref().map(decode).transpose()
    }

    async fn exists_by_id(&self, id: &ArticleId) -> DomainResult<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn.exists(document_key(id)).await.map_err(map_redis)?;
        Ok(exists)
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        let payload = encode(&article)?;
        let mut conn = self.connection().await?;

        let (): () = redis::pipe()
            .atomic()
            .set(document_key(&article.id), payload)
            .ignore()
            .sadd(INDEX_KEY, article.id.as_str())
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        Ok(article)
    }

    async fn delete_by_id(&self, id: &ArticleId) -> DomainResult<()> {
        let mut conn = self.connection().await?;

        let (): () = redis::pipe()
            .atomic()
            .del(document_key(id))
            .ignore()
            .srem(INDEX_KEY, id.as_str())
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(map_redis)?;

        Ok(())
    }
}
