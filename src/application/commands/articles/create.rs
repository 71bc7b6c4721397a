// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleContent, ArticleId, ArticleTitle, NewArticle},
};

/// Client draft. Either field may be missing on the wire; both are required.
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            title: self.title,
            content: self.content,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = command
            .title
            .ok_or_else(|| ApplicationError::validation("title is required"))?;
        let content = command
            .content
            .ok_or_else(|| ApplicationError::validation("content is required"))?;

        let draft = NewArticle {
            title: ArticleTitle::new(title)?,
            content: ArticleContent::new(content)?,
        };
        tracing::info!(title = %draft.title, "creating article");

        let id = ArticleId::new(self.ids.next_id())
            .map_err(|err| ApplicationError::unexpected(err.to_string()))?;
        let article = Article::create(id, draft, self.clock.now());

        let saved = self.repo.save(article).await.map_err(|err| {
            tracing::error!(error = %err, "failed to create article");
            ApplicationError::from(err)
        })?;

        tracing::info!(article_id = %saved.id, "article created");
        Ok(saved.into())
    }
}
