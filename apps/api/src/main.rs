mod analysis;
mod catalog;
mod config;
mod errors;
mod extract;
mod models;
mod news;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::GapResolver;
use crate::catalog::SkillCatalog;
use crate::config::Config;
use crate::news::HackerNewsClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Reference tables are loaded once and shared read-only
    let catalog = SkillCatalog::load(config.catalog_path.as_deref())?;
    let resolver = GapResolver::new(Arc::new(catalog));

    let news = HackerNewsClient::new(
        config.news_base_url.clone(),
        Duration::from_secs(config.news_timeout_secs),
    );
    info!("News feed: {} (limit {})", config.news_base_url, config.news_limit);

    let state = AppState {
        config: config.clone(),
        resolver,
        news: Arc::new(news),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
