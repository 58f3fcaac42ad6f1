// src/pipeline/serve.rs

//! HTTP server with the background news poller.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::api::{AppState, create_app};
use crate::error::Result;
use crate::models::Config;
use crate::services::{Catalog, HttpNewsSource, NewsFeed, NewsProcessor};

/// Build the news feed described by the config.
pub fn build_feed(config: &Config) -> Result<Arc<NewsFeed>> {
    let source = HttpNewsSource::from_env(&config.news)?;
    let processor = NewsProcessor::new(&config.news, &config.cleaning)?;
    Ok(Arc::new(NewsFeed::new(Arc::new(source), processor)))
}

/// Run the server until Ctrl-C, then stop the poller.
pub async fn run_server(config: &Config, catalog: Catalog) -> Result<()> {
    let feed = build_feed(config)?;
    let poller = feed.spawn_poller(Duration::from_secs(config.news.refresh_interval_secs));

    let state = AppState::new(Arc::clone(&feed), catalog, config.catalog.clone());
    let app = create_app(state);

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    log::info!("Listening on http://{}", addr);
    log::info!("News feed endpoint: {}", config.news.endpoint);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    poller.shutdown().await;
    served?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Shutdown signal received"),
        Err(e) => log::error!("Failed to listen for shutdown signal: {}", e),
    }
}
