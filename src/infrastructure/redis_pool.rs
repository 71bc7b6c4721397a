use deadpool_redis::{Config as DeadpoolConfig, CreatePoolError, Pool, Runtime};

/// Create a Redis connection pool from a URL such as `redis://:password@host:6379/0`.
pub fn init_pool(url: &str) -> Result<Pool, CreatePoolError> {
    DeadpoolConfig::from_url(url).create_pool(Some(Runtime::Tokio1))
}
