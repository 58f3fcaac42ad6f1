//! Shared server state.

use std::sync::Arc;
use std::time::Instant;

use crate::models::CatalogConfig;
use crate::services::{Catalog, NewsFeed};

/// Shared state for all route handlers.
///
/// Cloned into each handler via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// The news feed slot and its refresh path.
    pub feed: Arc<NewsFeed>,

    /// Reviewed tools.
    pub catalog: Arc<Catalog>,

    /// Affiliate tagging settings.
    pub catalog_config: Arc<CatalogConfig>,

    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(feed: Arc<NewsFeed>, catalog: Catalog, catalog_config: CatalogConfig) -> Self {
        Self {
            feed,
            catalog: Arc::new(catalog),
            catalog_config: Arc::new(catalog_config),
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
