use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleContent, ArticleId, ArticlePatch, ArticleTitle},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    /// Load, merge and save. The sequence is not atomic: a concurrent update
    /// to the same article between the load and the save is overwritten.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand { id, title, content } = command;
        let id = ArticleId::new(id)?;
        tracing::info!(article_id = %id, "updating article");

        let mut article = self
            .repo
            .find_by_id(&id)
            .await
            .map_err(|err| {
                tracing::error!(article_id = %id, error = %err, "failed to load article for update");
                ApplicationError::from(err)
            })?
            .ok_or_else(|| {
                tracing::warn!(article_id = %id, "article not found for update");
                ApplicationError::not_found(format!("article {id} not found"))
            })?;

        // A missing article is reported as NotFound whatever the patch holds.
        let mut patch = ArticlePatch::default();
        if let Some(title) = title {
            patch = patch.with_title(ArticleTitle::new(title)?);
        }
        if let Some(content) = content {
            patch = patch.with_content(ArticleContent::new(content)?);
        }

        article.revise(patch, self.clock.now());

        let updated = self.repo.save(article).await.map_err(|err| {
            tracing::error!(article_id = %id, error = %err, "failed to update article");
            ApplicationError::from(err)
        })?;

        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
