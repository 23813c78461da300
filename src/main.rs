use anyhow::Result;
use project_board::{
    application::{
        ports::{auditor::AuditorProvider, time::Clock},
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::store::BoardStore,
    infrastructure::{
        auditor::ConfiguredAuditor, database, repositories::PostgresBoardStore, time::SystemClock,
    },
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let auditor: Arc<dyn AuditorProvider> = Arc::new(ConfiguredAuditor::new(config.auditor())?);
    let store: Arc<dyn BoardStore> = Arc::new(PostgresBoardStore::new(pool, clock, auditor));

    let services = ApplicationServices::new(store);

    let article_count = services.article_queries.get_article_count().await?;
    let hashtags = services.article_queries.get_hashtags().await?;
    tracing::info!(
        articles = article_count,
        hashtags = hashtags.len(),
        auditor = config.auditor(),
        "board ready"
    );
    if !hashtags.is_empty() {
        tracing::info!("hashtags: {}", hashtags.join(", "));
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
