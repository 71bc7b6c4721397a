// src/config.rs
use std::{env, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Redis { url: String },
    Postgres { database_url: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    storage: StorageBackend,
    allowed_origins: Vec<String>,
    default_page_size: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_redis_url() -> String {
    "redis://127.0.0.1:6379/0".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_page_size() -> u32 {
    20
}

impl AppConfig {
    /// Build configuration from the process environment. A `.env` file is
    /// loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let backend = lookup("STORAGE_BACKEND").unwrap_or_else(|| "memory".into());
        let storage = match backend.trim().to_lowercase().as_str() {
            "memory" => StorageBackend::Memory,
            "redis" => StorageBackend::Redis {
                url: lookup("REDIS_URL").unwrap_or_else(default_redis_url),
            },
            "postgres" => StorageBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            other => {
                return Err(ConfigError::Invalid(format!(
                    "STORAGE_BACKEND must be one of memory, redis, postgres (got {other:?})"
                )));
            }
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let default_page_size = match lookup("DEFAULT_PAGE_SIZE") {
            Some(raw) => parse_positive("DEFAULT_PAGE_SIZE", &raw)?,
            None => default_page_size(),
        };

        Ok(Self {
            listen_addr,
            storage,
            allowed_origins,
            default_page_size,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn storage(&self) -> &StorageBackend {
        &self.storage
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::Invalid(format!(
            "{key} must be a positive integer (got {raw:?})"
        ))),
    }
}
