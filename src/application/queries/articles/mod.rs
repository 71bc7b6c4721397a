mod get_by_id;
mod list;
mod service;

pub use get_by_id::GetArticleQuery;
pub use list::ListArticlesQuery;
pub use service::{ArticleQueryService, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
