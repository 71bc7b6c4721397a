pub mod database;
pub mod id;
pub mod redis_pool;
pub mod repositories;
pub mod time;
pub mod timestamp;
