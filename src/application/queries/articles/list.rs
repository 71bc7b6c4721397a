use super::{ArticleQueryService, service::MAX_PAGE_SIZE};
use crate::{
    application::{
        dto::{ArticleDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleListCursor},
};

/// Listing request. With neither `limit` nor `cursor` the whole collection
/// is returned in a single page.
#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<CursorPage<ArticleDto>> {
        let paged = query.limit.is_some() || query.cursor.is_some();
        let limit = self.normalize_limit(query.limit);
        let cursor = query
            .cursor
            .as_deref()
            .map(ArticleListCursor::decode)
            .transpose()?;

        tracing::info!("fetching all articles");
        let mut records = self.repo.find_all().await.map_err(|err| {
            tracing::error!(error = %err, "failed to fetch articles");
            ApplicationError::from(err)
        })?;
        records.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));

        let page = if paged {
            paginate(records, cursor.as_ref(), limit)
        } else {
            CursorPage::new(records, None)
        };

        tracing::info!(count = page.items.len(), "fetched articles");
        Ok(page.map(Into::into))
    }

    pub(super) fn normalize_limit(&self, limit: Option<u32>) -> u32 {
        match limit {
            None | Some(0) => self.default_limit,
            Some(limit) => limit.min(MAX_PAGE_SIZE),
        }
    }
}

fn paginate(
    sorted: Vec<Article>,
    cursor: Option<&ArticleListCursor>,
    limit: u32,
) -> CursorPage<Article> {
    let limit = limit as usize;
    let mut items: Vec<Article> = sorted
        .into_iter()
        .filter(|article| cursor.is_none_or(|cursor| cursor.precedes(article)))
        .take(limit + 1)
        .collect();

    let mut next_cursor = None;
    if items.len() > limit {
        items.truncate(limit);
        next_cursor = items.last().map(|last| ArticleListCursor::after(last).encode());
    }

    CursorPage::new(items, next_cursor)
}
