use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        tracing::info!(article_id = %id, "fetching article");

        let article = self
            .repo
            .find_by_id(&id)
            .await
            .map_err(|err| {
                tracing::error!(article_id = %id, error = %err, "failed to fetch article");
                ApplicationError::from(err)
            })?
            .ok_or_else(|| {
                tracing::warn!(article_id = %id, "article not found");
                ApplicationError::not_found(format!("article {id} not found"))
            })?;

        Ok(article.into())
    }
}
