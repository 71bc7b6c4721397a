use anyhow::{Context, Result};
use knowledgebase::application::{
    ports::{id::IdGenerator, time::Clock},
    services::ApplicationServices,
};
use knowledgebase::config::{AppConfig, StorageBackend};
use knowledgebase::domain::article::ArticleRepository;
use knowledgebase::infrastructure::{
    database,
    id::UuidIdGenerator,
    redis_pool,
    repositories::{InMemoryArticleRepository, PostgresArticleRepository, RedisArticleRepository},
    time::SystemClock,
};
use knowledgebase::presentation::http::{routes::build_router_with_origins, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads `.env` before the subscriber reads `RUST_LOG`.
    let config = AppConfig::from_env()?;
    init_tracing();

    let article_repo = build_repository(config.storage()).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let id_generator: Arc<dyn IdGenerator> = Arc::new(UuidIdGenerator);

    let services = Arc::new(ApplicationServices::with_default_page_size(
        article_repo,
        clock,
        id_generator,
        config.default_page_size(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_origins(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repository(storage: &StorageBackend) -> Result<Arc<dyn ArticleRepository>> {
    let repo: Arc<dyn ArticleRepository> = match storage {
        StorageBackend::Memory => {
            tracing::warn!("using in-memory article storage; data is lost on restart");
            Arc::new(InMemoryArticleRepository::new())
        }
        StorageBackend::Redis { url } => {
            let pool = redis_pool::init_pool(url).context("failed to create redis pool")?;
            tracing::info!("using redis article storage");
            Arc::new(RedisArticleRepository::new(pool))
        }
        StorageBackend::Postgres { database_url } => {
            let pool = database::init_pool(database_url)
                .await
                .context("failed to connect to postgres")?;
            database::run_migrations(&pool)
                .await
                .context("failed to run migrations")?;
            tracing::info!("using postgres article storage");
            Arc::new(PostgresArticleRepository::new(pool))
        }
    };
    Ok(repo)
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
