// src/infrastructure/repositories/mod.rs
mod error;
mod memory_article;
mod postgres_article;
mod redis_article;

pub use error::{invalid_stored, map_redis, map_redis_pool, map_sqlx};
pub use memory_article::InMemoryArticleRepository;
pub use postgres_article::PostgresArticleRepository;
pub use redis_article::RedisArticleRepository;
