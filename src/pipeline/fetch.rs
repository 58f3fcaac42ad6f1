// src/pipeline/fetch.rs

//! One-shot feed fetch.

use crate::error::Result;
use crate::models::{Config, NewsItem};
use crate::services::{HttpNewsSource, NewsProcessor, NewsSource};

/// Fetch the feed once and return the cleaned items.
///
/// Unlike the server, a failed fetch is an error here: there is no previous
/// list to fall back to.
pub async fn run_fetch(config: &Config) -> Result<Vec<NewsItem>> {
    log::info!("Fetching news from {}", config.news.endpoint);

    let source = HttpNewsSource::from_env(&config.news)?;
    let processor = NewsProcessor::new(&config.news, &config.cleaning)?;

    let body = source.fetch().await?;
    let items = processor.process(body);

    log::info!("Fetched {} item(s)", items.len());
    Ok(items)
}
