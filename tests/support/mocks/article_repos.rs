// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use knowledgebase::domain::article::{Article, ArticleId, ArticleRepository};
use knowledgebase::domain::errors::{DomainError, DomainResult};
use knowledgebase::infrastructure::repositories::InMemoryArticleRepository;

pub const DRIVER_DETAIL: &str = "connection refused: tcp://10.0.0.7:6379";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Every call fails.
    Everything,
    /// Reads succeed against the seeded data; `save` and `delete_by_id` fail.
    Writes,
    /// `find_all` panics instead of returning; other calls behave like `Writes`.
    PanicOnList,
}

/// Article repository double that fails with a driver-style persistence error.
pub struct FailingArticleRepo {
    inner: InMemoryArticleRepository,
    mode: FailureMode,
}

impl FailingArticleRepo {
    pub fn new(mode: FailureMode) -> Self {
        Self::seeded(mode, Vec::new())
    }

    pub fn seeded(mode: FailureMode, articles: Vec<Article>) -> Self {
        Self {
            inner: InMemoryArticleRepository::with_articles(articles),
            mode,
        }
    }

    fn fail<T>() -> DomainResult<T> {
        Err(DomainError::Persistence(DRIVER_DETAIL.into()))
    }

    fn reads_fail(&self) -> bool {
        self.mode == FailureMode::Everything
    }
}

#[async_trait]
impl ArticleRepository for FailingArticleRepo {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        if self.mode == FailureMode::PanicOnList {
            panic!("article scan blew up");
        }
        if self.reads_fail() {
            return Self::fail();
        }
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        if self.reads_fail() {
            return Self::fail();
        }
        self.inner.find_by_id(id).await
    }

    async fn exists_by_id(&self, id: &ArticleId) -> DomainResult<bool> {
        if self.reads_fail() {
            return Self::fail();
        }
        self.inner.exists_by_id(id).await
    }

    async fn save(&self, _article: Article) -> DomainResult<Article> {
        Self::fail()
    }

    async fn delete_by_id(&self, _id: &ArticleId) -> DomainResult<()> {
        Self::fail()
    }
}
