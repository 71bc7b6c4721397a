// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{id::IdGenerator, time::Clock},
    domain::article::ArticleRepository,
};

/// Write side of the article service. Holds no state of its own; every
/// durable change goes through the injected repository.
pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) ids: Arc<dyn IdGenerator>,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { repo, clock, ids }
    }
}
