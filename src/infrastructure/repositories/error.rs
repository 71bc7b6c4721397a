use crate::domain::errors::DomainError;

const CNT_ARTICLE_PKEY: &str = "articles_pkey";
const CNT_ARTICLE_TIMESTAMPS: &str = "articles_timestamps_ordered_chk";

/// Fold a driver error into the domain taxonomy. Absence is never reported
/// through this path, so everything lands in `Persistence`.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_PKEY => {
                        DomainError::Persistence("article id collision".into())
                    }
                    CNT_ARTICLE_TIMESTAMPS => DomainError::Persistence(
                        "stored article would have created_at after updated_at".into(),
                    ),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => DomainError::Persistence("database pool timed out".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

pub fn map_redis(err: redis::RedisError) -> DomainError {
    DomainError::Persistence(format!("redis: {err}"))
}

pub fn map_redis_pool(err: deadpool_redis::PoolError) -> DomainError {
    DomainError::Persistence(format!("redis pool: {err}"))
}

/// A stored record failed domain validation on read. That is a storage fault,
/// not a client input problem.
pub fn invalid_stored(err: DomainError) -> DomainError {
    match err {
        DomainError::Validation(msg) => {
            DomainError::Persistence(format!("invalid stored article: {msg}"))
        }
        other => other,
    }
}
