// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{id::IdGenerator, time::Clock},
        queries::articles::{ArticleQueryService, DEFAULT_PAGE_SIZE},
    },
    domain::article::ArticleRepository,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
    ) -> Self {
        Self::with_default_page_size(article_repo, clock, id_generator, DEFAULT_PAGE_SIZE)
    }

    /// Page size applies to listings that pass a cursor without a limit.
    pub fn with_default_page_size(
        article_repo: Arc<dyn ArticleRepository>,
        clock: Arc<dyn Clock>,
        id_generator: Arc<dyn IdGenerator>,
        default_page_size: u32,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            clock,
            id_generator,
        ));
        let article_queries = Arc::new(
            ArticleQueryService::new(article_repo).with_default_limit(default_page_size),
        );

        Self {
            article_commands,
            article_queries,
        }
    }
}
