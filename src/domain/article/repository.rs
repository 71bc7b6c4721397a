use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Key-addressed article storage.
///
/// Absence is reported through `Option`/`bool`; `DomainError::Persistence` is
/// reserved for storage faults.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    async fn exists_by_id(&self, id: &ArticleId) -> DomainResult<bool>;
    /// Insert or replace the record keyed by `article.id`.
    async fn save(&self, article: Article) -> DomainResult<Article>;
    /// Removing an absent id is not an error at this layer.
    async fn delete_by_id(&self, id: &ArticleId) -> DomainResult<()>;
}
