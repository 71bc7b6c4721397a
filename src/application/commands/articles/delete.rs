// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    /// Deleting an id that does not exist fails with `NotFound`, so a repeated
    /// delete is reported to the caller.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        tracing::info!(article_id = %id, "deleting article");

        let exists = self.repo.exists_by_id(&id).await.map_err(|err| {
            tracing::error!(article_id = %id, error = %err, "failed to check article existence");
            ApplicationError::from(err)
        })?;
        if !exists {
            tracing::warn!(article_id = %id, "article not found for deletion");
            return Err(ApplicationError::not_found(format!("article {id} not found")));
        }

        self.repo.delete_by_id(&id).await.map_err(|err| {
            tracing::error!(article_id = %id, error = %err, "failed to delete article");
            ApplicationError::from(err)
        })?;

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
