use std::sync::Arc;

use crate::domain::article::ArticleRepository;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) default_limit: u32,
}

impl ArticleQueryService {
    pub fn new(repo: Arc<dyn ArticleRepository>) -> Self {
        Self {
            repo,
            default_limit: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size applied when a cursor is supplied without an explicit limit.
    pub fn with_default_limit(mut self, limit: u32) -> Self {
        self.default_limit = limit.clamp(1, MAX_PAGE_SIZE);
        self
    }
}
