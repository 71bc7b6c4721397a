use crate::domain::article::{Article, ArticleId, ArticleRepository};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local article store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: impl IntoIterator<Item = Article>) -> Self {
        let map = articles
            .into_iter()
            .map(|article| (article.id.clone(), article))
            .collect();
        Self {
            articles: RwLock::new(map),
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.read().await.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &ArticleId) -> DomainResult<bool> {
        Ok(self.articles.read().await.contains_key(id))
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        self.articles
            .write()
            .await
            .insert(article.id.clone(), article.clone());
        Ok(article)
    }

    async fn delete_by_id(&self, id: &ArticleId) -> DomainResult<()> {
        self.articles.write().await.remove(id);
        Ok(())
    }
}
